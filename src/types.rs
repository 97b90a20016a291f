//! Type definitions shared by the layout and the PDF encoder
//!
//! Layout coordinates are millimetres with the origin at the top-left corner
//! of the page; text `y` is the baseline.

/// Rectangle with position and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Color representation (components 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// From 0-255 channel values
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0 }
    }

    pub fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0 }
    }
}

/// Standard font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Horizontal anchoring of a text run relative to its `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Text style for rendering text runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn regular(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color: Color::black(),
            align: TextAlign::Left,
        }
    }

    pub fn bold(size: f64) -> Self {
        Self { weight: FontWeight::Bold, ..Self::regular(size) }
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(11.0)
    }
}
