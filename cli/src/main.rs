//! undoc CLI - document ingestion tool

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undoc::{Document, DocumentType, Pipeline, PipelineConfig, SegmentOptions};

mod client;

use client::{ApiClient, RemoteChart, RemoteNarration, RemoteVision, NARRATION_MODEL};

#[derive(Parser)]
#[command(name = "undoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Ingest documents into retrieval-ready JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest files or directories into a documents JSON file
    Ingest {
        /// Input files or directories
        #[arg(value_name = "PATH", required = true)]
        inputs: Vec<PathBuf>,

        /// Output JSON file
        #[arg(short, long, value_name = "FILE", default_value = "documents.json")]
        output: PathBuf,

        /// Directory for extracted table and image references
        #[arg(long, value_name = "DIR", default_value = "vectorstore")]
        artifacts: PathBuf,

        /// API key for the hosted caption services
        #[arg(long, env = "NVIDIA_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Narration model name
        #[arg(long, default_value = NARRATION_MODEL)]
        model: String,

        /// Character budget for grouping text blocks
        #[arg(long, default_value = "500")]
        chunk_chars: usize,

        /// Process files in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest {
            inputs,
            output,
            artifacts,
            api_key,
            model,
            chunk_chars,
            parallel,
        } => cmd_ingest(
            &inputs,
            &output,
            &artifacts,
            &api_key,
            &model,
            chunk_chars,
            parallel,
        ),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_ingest(
    inputs: &[PathBuf],
    output: &Path,
    artifacts: &Path,
    api_key: &str,
    model: &str,
    chunk_chars: usize,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = collect_inputs(inputs)?;
    if files.is_empty() {
        println!("{}", "No input files found".yellow());
        return Ok(());
    }

    let api = ApiClient::new(api_key)?;
    let pipeline = Pipeline::builder()
        .vision(Arc::new(RemoteVision::new(api.clone())))
        .chart(Arc::new(RemoteChart::new(api.clone())))
        .narration(Arc::new(RemoteNarration::new(api, model)))
        .artifact_root(artifacts)
        .options(SegmentOptions::new().with_char_count_threshold(chunk_chars))
        .config(PipelineConfig::new().with_parallel(parallel))
        .build()?;

    for file in &files {
        let ext = file
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !pipeline.registry().supports(&ext) {
            log::warn!("no loader registered for {}", file.display());
            println!(
                "{} {} (no loader for .{ext})",
                "Skipping".yellow(),
                file.display()
            );
        }
    }

    let documents = if parallel {
        let pb = spinner(format!("Ingesting {} files...", files.len()))?;
        let documents = pipeline.load_batch(&files);
        pb.finish_with_message("Done!");
        documents
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );

        let mut documents = Vec::new();
        for file in &files {
            pb.set_message(file.display().to_string());
            documents.extend(pipeline.load_batch(std::slice::from_ref(file)));
            pb.inc(1);
        }
        pb.finish_with_message("Done!");
        documents
    };

    let json = serde_json::to_string_pretty(&documents)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, json)?;

    print_summary(&documents, output, artifacts);
    Ok(())
}

/// Expand directories one level deep and sort for a stable order.
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(input)?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file())
                .collect();
            entries.sort();
            files.extend(entries);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("input not found: {}", input.display()).into());
        }
    }
    Ok(files)
}

fn spinner(message: String) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message);
    Ok(pb)
}

fn print_summary(documents: &[Document], output: &Path, artifacts: &Path) {
    let texts = count_type(documents, DocumentType::Text);
    let tables = count_type(documents, DocumentType::Table);
    let images = count_type(documents, DocumentType::Image);

    println!("\n{}", "Ingestion summary".green().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Documents".bold(), documents.len());
    println!("{}: {}", "Text".bold(), texts);
    println!("{}: {}", "Tables".bold(), tables);
    println!("{}: {}", "Images".bold(), images);
    println!();
    println!("{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), output.display());
    println!("  {} {}/", "└─".dimmed(), artifacts.display());
}

fn count_type(documents: &[Document], doc_type: DocumentType) -> usize {
    documents
        .iter()
        .filter(|d| d.metadata.doc_type == doc_type)
        .count()
}

fn cmd_version() {
    println!("{} {}", "undoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document ingestion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/undoc".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_inputs_expands_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let files = collect_inputs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn test_collect_inputs_rejects_missing_path() {
        let missing = PathBuf::from("/definitely/not/here.txt");
        assert!(collect_inputs(&[missing]).is_err());
    }
}
