//! Integration tests for page segmentation.

mod common;

use common::{captioner, FakePage};
use undoc::{
    BoundingBox, DocumentType, LocalArtifactStore, PageSegmenter, SegmentOptions, TableData,
    TableRegion,
};

fn store() -> (tempfile::TempDir, LocalArtifactStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalArtifactStore::new(dir.path());
    (dir, store)
}

fn revenue_table(bbox: BoundingBox) -> TableRegion {
    TableRegion {
        bbox,
        data: TableData::new(
            vec!["Year".to_string(), "Revenue".to_string()],
            vec![vec!["2024".to_string(), "1.9M".to_string()]],
        ),
    }
}

#[test]
fn single_heading_and_body_yield_one_text_document() {
    let body: String = "x".repeat(400);
    let page = FakePage::new(100.0, 100.0)
        .with_block(BoundingBox::new(10.0, 20.0, 90.0, 28.0), "Intro")
        .with_block(BoundingBox::new(10.0, 30.0, 90.0, 60.0), &body);

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].text, format!("Intro\n{body}"));
    assert_eq!(docs[0].id, "report-page0-block1");
    assert_eq!(docs[0].metadata.doc_type, DocumentType::Text);
    assert_eq!(docs[0].metadata.page_num, Some(0));
    assert!(docs[0].metadata.bbox.is_some());
}

#[test]
fn header_and_footer_bands_are_excluded() {
    let page = FakePage::new(100.0, 100.0)
        // Inside the top 10% band.
        .with_block(BoundingBox::new(10.0, 2.0, 90.0, 8.0), "Running header")
        .with_block(BoundingBox::new(10.0, 40.0, 90.0, 50.0), "Body")
        // Reaches into the bottom 10% band.
        .with_block(BoundingBox::new(10.0, 85.0, 90.0, 95.0), "Page 1 of 9");

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].text, "Body");
}

#[test]
fn table_with_no_surrounding_text_gets_header_caption() {
    let table_bbox = BoundingBox::new(20.0, 40.0, 80.0, 60.0);
    let page = FakePage::new(100.0, 100.0)
        .with_table(revenue_table(table_bbox))
        // A stray block inside the table region: suppressed from text
        // output and neither above nor below the box for captioning.
        .with_block(BoundingBox::new(25.0, 45.0, 75.0, 55.0), "2024 1.9M");

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    assert_eq!(docs.len(), 1);
    let table_doc = &docs[0];
    assert_eq!(table_doc.metadata.doc_type, DocumentType::Table);
    assert_eq!(table_doc.metadata.caption.as_deref(), Some("Year Revenue"));
    assert_eq!(
        table_doc.text,
        "This is a table with the caption: Year Revenue\nThe columns are Year, Revenue"
    );
    assert!(table_doc.metadata.dataframe_path.as_ref().unwrap().exists());
    assert!(table_doc.metadata.image_path.as_ref().unwrap().exists());
}

#[test]
fn table_caption_combines_surrounding_text_and_narration() {
    let table_bbox = BoundingBox::new(20.0, 40.0, 80.0, 60.0);
    let page = FakePage::new(100.0, 100.0)
        .with_table(revenue_table(table_bbox))
        .with_block(BoundingBox::new(20.0, 32.0, 80.0, 38.0), "Table 1:\nrevenue")
        .with_block(BoundingBox::new(20.0, 62.0, 80.0, 68.0), "Figures audited");

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    let table_doc = docs
        .iter()
        .find(|d| d.metadata.doc_type == DocumentType::Table)
        .unwrap();
    let caption = table_doc.metadata.caption.as_deref().unwrap();

    // Newlines in the located text flatten to spaces; the narrated
    // deplot output sits between the before and after text.
    assert_eq!(caption, "Table 1: revenueNarrated: Year | RevenueFigures audited");
}

#[test]
fn suppressed_groups_still_consume_counter_slots() {
    let table_bbox = BoundingBox::new(20.0, 40.0, 80.0, 60.0);
    let inside = "i".repeat(300);
    let outside = "o".repeat(300);
    let page = FakePage::new(100.0, 100.0)
        .with_table(revenue_table(table_bbox))
        .with_block(BoundingBox::new(25.0, 45.0, 75.0, 55.0), &inside)
        .with_block(BoundingBox::new(10.0, 70.0, 90.0, 80.0), &outside);

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    let text_docs: Vec<_> = docs
        .iter()
        .filter(|d| d.metadata.doc_type == DocumentType::Text)
        .collect();
    assert_eq!(text_docs.len(), 1);
    // The first group intersected the table and was suppressed, but its
    // counter slot is not reused.
    assert_eq!(text_docs[0].id, "report-page0-block2");
}

#[test]
fn failed_table_render_is_skipped_but_still_suppresses_text() {
    let table_bbox = BoundingBox::new(20.0, 40.0, 80.0, 60.0);
    let inside = "i".repeat(300);
    let outside = "o".repeat(300);
    let page = FakePage::new(100.0, 100.0)
        .with_failing_render()
        .with_table(revenue_table(table_bbox))
        .with_block(BoundingBox::new(25.0, 45.0, 75.0, 55.0), &inside)
        .with_block(BoundingBox::new(10.0, 70.0, 90.0, 80.0), &outside);

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    // The table document is dropped, but its region still claims the text
    // group inside it.
    assert!(docs
        .iter()
        .all(|d| d.metadata.doc_type == DocumentType::Text));
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "report-page0-block2");
    assert_eq!(docs[0].text, outside);
}

#[test]
fn small_images_are_dropped_at_the_size_cutoff() {
    // Page 200x200: the cutoff is 10 units in each dimension.
    let page = FakePage::new(200.0, 200.0)
        .with_block(BoundingBox::new(10.0, 85.0, 190.0, 95.0), "Nearby caption")
        // Exactly at the cutoff: kept.
        .with_image(3, BoundingBox::new(20.0, 100.0, 30.0, 110.0))
        // Just under in width: dropped.
        .with_image(4, BoundingBox::new(60.0, 100.0, 69.9, 110.0))
        // Just under in height: dropped.
        .with_image(5, BoundingBox::new(100.0, 100.0, 120.0, 109.5));

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "deck", 0);

    let image_docs: Vec<_> = docs
        .iter()
        .filter(|d| d.metadata.doc_type == DocumentType::Image)
        .collect();
    assert_eq!(image_docs.len(), 1);
    assert_eq!(image_docs[0].id, "deck-page0-image3");
}

#[test]
fn image_with_no_surrounding_text_is_dropped() {
    let page = FakePage::new(100.0, 100.0)
        .with_image(2, BoundingBox::new(20.0, 40.0, 80.0, 60.0));

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    assert!(docs.is_empty());
}

#[test]
fn background_xref_zero_is_never_extracted() {
    let page = FakePage::new(100.0, 100.0)
        .with_block(BoundingBox::new(10.0, 30.0, 90.0, 38.0), "Caption text")
        .with_image(0, BoundingBox::new(20.0, 40.0, 80.0, 60.0));

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    assert!(docs
        .iter()
        .all(|d| d.metadata.doc_type != DocumentType::Image));
}

#[test]
fn graph_images_get_narrated_descriptions() {
    let page = FakePage::new(100.0, 100.0)
        .with_block(BoundingBox::new(20.0, 30.0, 80.0, 38.0), "Quarterly results")
        .with_image(7, BoundingBox::new(20.0, 40.0, 80.0, 60.0));

    // "chart" keyword marks the image as a graph.
    let cap = captioner("This chart shows quarterly results");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    // One image document plus the caption block's own text document.
    assert_eq!(docs.len(), 2);
    let image_doc = &docs[0];
    assert_eq!(image_doc.metadata.doc_type, DocumentType::Image);
    let caption = image_doc.metadata.caption.as_deref().unwrap();
    assert_eq!(caption, "Quarterly resultsNarrated: Year | Revenue");
    assert_eq!(
        image_doc.text,
        format!("This is an image with the caption: {caption}")
    );
}

#[test]
fn non_graph_images_get_placeholder_descriptions() {
    let page = FakePage::new(100.0, 100.0)
        .with_block(BoundingBox::new(20.0, 30.0, 80.0, 38.0), "Our office")
        .with_image(7, BoundingBox::new(20.0, 40.0, 80.0, 60.0));

    let cap = captioner("A photo of a building");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    let image_doc = docs
        .iter()
        .find(|d| d.metadata.doc_type == DocumentType::Image)
        .unwrap();
    assert_eq!(image_doc.metadata.caption.as_deref(), Some("Our office "));
}

#[test]
fn external_header_tables_are_skipped() {
    let table_bbox = BoundingBox::new(20.0, 40.0, 80.0, 60.0);
    let region = TableRegion {
        bbox: table_bbox,
        data: TableData::new(
            vec!["Col1".to_string(), "Col2".to_string()],
            vec![vec!["a".to_string(), "b".to_string()]],
        )
        .with_external_header(),
    };
    let page = FakePage::new(100.0, 100.0).with_table(region);

    let cap = captioner("A photo of a cat");
    let (_dir, store) = store();
    let options = SegmentOptions::default();
    let docs = PageSegmenter::new(&cap, &store, &options).segment(&page, "report", 0);

    assert!(docs.is_empty());
}
