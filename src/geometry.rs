//! Geometry utilities for PDF rendering
//!
//! The layout works in millimetres from the top-left corner; PDF user space
//! is points from the bottom-left corner.

use pdf_writer::Rect as PdfRect;

use crate::types::{Color, Rect};

/// Points per millimetre
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// Millimetres per point
pub const PT_TO_MM: f64 = 25.4 / 72.0;

/// Millimetre length to points
pub fn mm(value: f64) -> f32 {
    (value * MM_TO_PT) as f32
}

/// Top-origin y (mm) to bottom-origin y (pt)
pub fn flip_y(y_mm: f64, page_height_mm: f64) -> f32 {
    mm(page_height_mm - y_mm)
}

/// Layout rect (mm, top-left) to a PDF rect (pt, bottom-left corners)
pub fn rect_to_pdf(rect: &Rect, page_height_mm: f64) -> PdfRect {
    PdfRect::new(
        mm(rect.x),
        flip_y(rect.bottom(), page_height_mm),
        mm(rect.x + rect.width),
        flip_y(rect.y, page_height_mm),
    )
}

/// Page media box for the given size in millimetres
pub fn media_box(width_mm: f64, height_mm: f64) -> PdfRect {
    PdfRect::new(0.0, 0.0, mm(width_mm), mm(height_mm))
}

/// Convert color to PDF RGB values (0.0-1.0)
pub fn color_to_pdf_rgb(color: &Color) -> (f32, f32, f32) {
    (color.r as f32, color.g as f32, color.b as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_in_points() {
        let a4 = media_box(210.0, 297.0);
        assert!((a4.x2 - 595.28).abs() < 0.01);
        assert!((a4.y2 - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_rect_flips_to_bottom_origin() {
        let header = rect_to_pdf(&Rect::new(0.0, 0.0, 210.0, 40.0), 297.0);
        assert!((header.y1 - mm(257.0)).abs() < 1e-3);
        assert!((header.y2 - mm(297.0)).abs() < 1e-3);
    }
}
