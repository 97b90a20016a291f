//! Intermediate contract layout
//!
//! The generator produces a `ContractDocument`: pages of positioned draw
//! commands in millimetres. Nothing here knows about PDF objects, so the
//! pagination can be tested without encoding anything.

use image::RgbaImage;
use log::debug;

use crate::types::{Color, Rect, TextStyle};

/// A4 width
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// A4 height
pub const PAGE_HEIGHT_MM: f64 = 297.0;

pub const MARGIN_MM: f64 = 20.0;

pub const CONTENT_WIDTH_MM: f64 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

/// The cursor may not move past this line; a block that would is moved to a new page
pub const BOTTOM_THRESHOLD_MM: f64 = PAGE_HEIGHT_MM - 70.0;

/// Baseline of the footer disclaimer on every page
pub const FOOTER_BASELINE_MM: f64 = PAGE_HEIGHT_MM - 15.0;

/// One positioned drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `y` is the baseline; for centered text `x` is the center
    Text { x: f64, y: f64, text: String, style: TextStyle },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64 },
    Fill { rect: Rect, color: Color },
    /// Index into `ContractDocument::images`
    Image { rect: Rect, image: usize },
}

/// Fixed sections of the contract, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Title,
    Identification,
    VehicleInformation,
    RenterInformation,
    TermsAndConditions,
    Signature,
    Footer,
}

/// Where a section started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMark {
    pub section: Section,
    /// 1-based
    pub page: u32,
}

/// A page of draw commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutPage {
    pub commands: Vec<DrawCommand>,
}

impl LayoutPage {
    pub fn texts(&self) -> impl Iterator<Item = (&str, f64)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, y, .. } => Some((text.as_str(), *y)),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|(text, _)| text.contains(needle))
    }
}

/// The laid-out contract; immutable once produced
#[derive(Debug, Clone, PartialEq)]
pub struct ContractDocument {
    pub contract_id: String,
    pub filename: String,
    pub title: String,
    pub pages: Vec<LayoutPage>,
    pub images: Vec<RgbaImage>,
    pub sections: Vec<SectionMark>,
}

impl ContractDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|page| page.contains_text(needle))
    }

    /// Page (1-based) on which `section` starts
    pub fn section_page(&self, section: Section) -> Option<u32> {
        self.sections.iter().find(|m| m.section == section).map(|m| m.page)
    }

    pub fn section_order(&self) -> Vec<Section> {
        self.sections.iter().map(|m| m.section).collect()
    }
}

/// Running-cursor page builder
pub(crate) struct PageBuilder {
    pages: Vec<LayoutPage>,
    images: Vec<RgbaImage>,
    sections: Vec<SectionMark>,
    cursor: f64,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            pages: vec![LayoutPage::default()],
            images: Vec::new(),
            sections: Vec::new(),
            cursor: MARGIN_MM,
        }
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn set_cursor(&mut self, y: f64) {
        self.cursor = y;
    }

    pub fn advance(&mut self, dy: f64) {
        self.cursor += dy;
    }

    pub fn page_number(&self) -> u32 {
        self.pages.len() as u32
    }

    pub fn mark(&mut self, section: Section) {
        let page = self.page_number();
        self.sections.push(SectionMark { section, page });
    }

    pub fn new_page(&mut self) {
        self.pages.push(LayoutPage::default());
        self.cursor = MARGIN_MM;
        debug!("page break: now on page {}", self.pages.len());
    }

    /// Start a new page if `height` more would pass the bottom threshold
    pub fn ensure_room(&mut self, height: f64) -> bool {
        if self.cursor + height > BOTTOM_THRESHOLD_MM {
            self.new_page();
            true
        } else {
            false
        }
    }

    fn push(&mut self, command: DrawCommand) {
        if let Some(page) = self.pages.last_mut() {
            page.commands.push(command);
        }
    }

    /// Text at the cursor line
    pub fn text(&mut self, x: f64, text: impl Into<String>, style: TextStyle) {
        let y = self.cursor;
        self.text_at(x, y, text, style);
    }

    pub fn text_at(&mut self, x: f64, y: f64, text: impl Into<String>, style: TextStyle) {
        self.push(DrawCommand::Text { x, y, text: text.into(), style });
    }

    /// Full content-width rule at the cursor
    pub fn separator(&mut self, color: Color) {
        let y = self.cursor;
        self.line(MARGIN_MM, y, PAGE_WIDTH_MM - MARGIN_MM, y, color);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
        self.push(DrawCommand::Line { x1, y1, x2, y2, color, width: 0.2 });
    }

    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::Fill { rect, color });
    }

    pub fn image(&mut self, rect: Rect, image: RgbaImage) {
        self.images.push(image);
        let index = self.images.len() - 1;
        self.push(DrawCommand::Image { rect, image: index });
    }

    /// Apply `f` to every page (1-based page number)
    pub fn for_each_page(&mut self, mut f: impl FnMut(&mut LayoutPage, u32)) {
        for (i, page) in self.pages.iter_mut().enumerate() {
            f(page, i as u32 + 1);
        }
    }

    pub fn finish(self, contract_id: String, filename: String, title: String) -> ContractDocument {
        ContractDocument {
            contract_id,
            filename,
            title,
            pages: self.pages,
            images: self.images,
            sections: self.sections,
        }
    }
}
