//! Shared fakes for integration tests: in-memory paged sources, slide
//! decks, and scripted caption services.

use std::sync::Arc;
use undoc::{
    BoundingBox, Captioner, ChartService, Error, NarrationService, PageBlock, PageImage,
    PageSourceReader, PagedSource, Result, Slide, SlideReader, SlideSource, SourcePage,
    TableRegion, VisionService,
};

/// One in-memory page.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    pub width: f32,
    pub height: f32,
    pub blocks: Vec<PageBlock>,
    pub images: Vec<PageImage>,
    pub tables: Vec<TableRegion>,
    pub fail_render: bool,
}

impl FakePage {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_block(mut self, bbox: BoundingBox, text: &str) -> Self {
        self.blocks.push(PageBlock::text(bbox, text));
        self
    }

    pub fn with_image(mut self, xref: u32, bbox: BoundingBox) -> Self {
        self.images.push(PageImage {
            xref,
            bbox,
            bytes: vec![0xAB; 16],
        });
        self
    }

    pub fn with_table(mut self, region: TableRegion) -> Self {
        self.tables.push(region);
        self
    }

    pub fn with_failing_render(mut self) -> Self {
        self.fail_render = true;
        self
    }
}

impl SourcePage for FakePage {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn text_blocks(&self) -> Vec<PageBlock> {
        self.blocks.clone()
    }

    fn images(&self) -> Vec<PageImage> {
        self.images.clone()
    }

    fn find_tables(&self) -> Result<Vec<TableRegion>> {
        Ok(self.tables.clone())
    }

    fn render_region(&self, _bbox: &BoundingBox) -> Result<Vec<u8>> {
        if self.fail_render {
            return Err(Error::Other("raster backend failed".to_string()));
        }
        Ok(vec![0xCD; 16])
    }
}

/// An in-memory paged source.
pub struct FakeSource {
    pub pages: Vec<FakePage>,
}

impl PagedSource for FakeSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Box<dyn SourcePage + '_>> {
        let page = self
            .pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))?;
        Ok(Box::new(page))
    }
}

/// Reader that serves a preset page list, or fails to open.
pub struct FakeReader {
    pub pages: Vec<FakePage>,
    pub fail_open: bool,
}

impl FakeReader {
    pub fn new(pages: Vec<FakePage>) -> Self {
        Self {
            pages,
            fail_open: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            pages: Vec::new(),
            fail_open: true,
        }
    }
}

impl PageSourceReader for FakeReader {
    fn open(&self, _bytes: &[u8]) -> Result<Box<dyn PagedSource>> {
        if self.fail_open {
            return Err(Error::SourceOpen("corrupt test source".to_string()));
        }
        Ok(Box::new(FakeSource {
            pages: self.pages.clone(),
        }))
    }
}

/// Slide deck reader serving preset slides.
pub struct FakeSlideReader {
    pub slides: Vec<Slide>,
}

struct FakeDeck {
    slides: Vec<Slide>,
}

impl SlideSource for FakeDeck {
    fn slides(&self) -> Result<Vec<Slide>> {
        Ok(self.slides.clone())
    }
}

impl SlideReader for FakeSlideReader {
    fn open(&self, _bytes: &[u8]) -> Result<Box<dyn SlideSource>> {
        Ok(Box::new(FakeDeck {
            slides: self.slides.clone(),
        }))
    }
}

/// Vision service returning a fixed description.
pub struct ScriptedVision(pub &'static str);

impl VisionService for ScriptedVision {
    fn describe(&self, _image: &[u8]) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Chart service returning a fixed linearized table.
pub struct FakeChart;

impl ChartService for FakeChart {
    fn deplot(&self, _image: &[u8]) -> Result<String> {
        Ok("Year | Revenue".to_string())
    }
}

/// Narration service that tags its input.
pub struct FakeNarration;

impl NarrationService for FakeNarration {
    fn narrate(&self, table_text: &str) -> Result<String> {
        Ok(format!("Narrated: {table_text}"))
    }
}

/// Captioner whose vision service always answers `description`.
pub fn captioner(description: &'static str) -> Captioner {
    Captioner::new(
        Arc::new(ScriptedVision(description)),
        Arc::new(FakeChart),
        Arc::new(FakeNarration),
    )
}
