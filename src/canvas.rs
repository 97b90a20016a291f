//! Canvas-like wrapper around a pdf-writer content stream
//!
//! Coordinates passed in here are already PDF points (bottom-left origin).

use pdf_writer::{Content, Name, Str};

use crate::geometry::color_to_pdf_rgb;
use crate::types::Color;
use crate::unicode_utils::unicode_to_winansi;

/// Canvas state for graphics operations
#[derive(Clone)]
pub struct CanvasState {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f32,
    pub font_name: Name<'static>,
    pub font_size: f32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            fill_color: Color::black(),
            stroke_color: Color::black(),
            line_width: 1.0,
            font_name: Name(b"F1"), // Default font (must be registered)
            font_size: 11.0,
        }
    }
}

/// High-level Canvas wrapper for pdf-writer
pub struct PdfCanvas {
    content: Content,
    state: CanvasState,
    state_stack: Vec<CanvasState>,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self {
            content: Content::new(),
            state: CanvasState::default(),
            state_stack: Vec::new(),
        }
    }

    /// Get content (for finalizing)
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    // ===== State Management =====

    pub fn save_state(&mut self) {
        self.state_stack.push(self.state.clone());
        self.content.save_state();
    }

    pub fn restore_state(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
            self.content.restore_state();
        }
    }

    // ===== Colors =====

    pub fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color == color {
            return;
        }
        self.state.fill_color = color;
        let (r, g, b) = color_to_pdf_rgb(&color);
        self.content.set_fill_rgb(r, g, b);
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color == color {
            return;
        }
        self.state.stroke_color = color;
        let (r, g, b) = color_to_pdf_rgb(&color);
        self.content.set_stroke_rgb(r, g, b);
    }

    // ===== Drawing =====

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.content.rect(x, y, width, height);
        self.content.fill_nonzero();
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.content.move_to(x1, y1);
        self.content.line_to(x2, y2);
        self.content.stroke();
    }

    pub fn set_line_width(&mut self, width: f32) {
        if self.state.line_width == width {
            return;
        }
        self.state.line_width = width;
        self.content.set_line_width(width);
    }

    // ===== Text =====

    pub fn set_font(&mut self, font_name: Name<'static>, size: f32) {
        self.state.font_name = font_name;
        self.state.font_size = size;
    }

    /// Show `text` with its baseline starting at (x, y)
    ///
    /// Standard Type1 fonts are declared with WinAnsiEncoding, so the string
    /// is transcoded from UTF-8 first.
    pub fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        self.content.begin_text();
        self.content.set_font(self.state.font_name, self.state.font_size);
        self.content.next_line(x, y);
        let winansi_bytes = unicode_to_winansi(text);
        self.content.show(Str(&winansi_bytes));
        self.content.end_text();
    }

    // ===== Images =====

    /// Paint an image XObject into the box with bottom-left corner (x, y)
    pub fn draw_image(&mut self, image_name: Name<'_>, x: f32, y: f32, width: f32, height: f32) {
        // Images are 1x1 in their own space; the matrix scales and positions them
        self.save_state();
        self.content.transform([width, 0.0, 0.0, height, x, y]);
        self.content.x_object(image_name);
        self.restore_state();
    }
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}
