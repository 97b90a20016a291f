//! Raster operations for the signature surface
//!
//! Strokes are stamped onto a transparent RGBA buffer with a round pen. The
//! shape heuristic only needs per-pixel alpha, so it is written against the
//! small `AlphaRaster` trait instead of a concrete image type.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::error::CaptureError;
use crate::stroke::{SignatureRecording, Stroke};

/// Pen radius in surface pixels
pub const PEN_RADIUS: i32 = 1;

/// Ink colour of the pen (opaque black)
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Largest surface edge we agree to allocate
pub const MAX_SURFACE_EDGE: u32 = 8192;

/// Spacing between pen stamps along a segment
const STAMP_STEP: f64 = 0.5;

/// Native pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_usable(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.width <= MAX_SURFACE_EDGE
            && self.height <= MAX_SURFACE_EDGE
    }
}

/// Read access to the alpha channel of a raster
pub trait AlphaRaster {
    fn dimensions(&self) -> (u32, u32);
    fn alpha_at(&self, x: u32, y: u32) -> u8;
}

impl AlphaRaster for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y)[3]
    }
}

/// Inclusive pixel bounds of drawn content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelBounds {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Tight bounding box of all non-transparent pixels, `None` for a blank raster
pub fn alpha_bounds<R: AlphaRaster + ?Sized>(raster: &R) -> Option<PixelBounds> {
    let (width, height) = raster.dimensions();
    let mut bounds: Option<PixelBounds> = None;
    for y in 0..height {
        for x in 0..width {
            if raster.alpha_at(x, y) == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => PixelBounds { min_x: x, min_y: y, max_x: x, max_y: y },
                Some(b) => PixelBounds {
                    min_x: b.min_x.min(x),
                    min_y: b.min_y.min(y),
                    max_x: b.max_x.max(x),
                    max_y: b.max_y.max(y),
                },
            });
        }
    }
    bounds
}

/// Allocate a fully transparent raster of the given size
pub fn blank_raster(size: SurfaceSize) -> Result<RgbaImage, CaptureError> {
    if !size.is_usable() {
        return Err(CaptureError::SurfaceUnavailable {
            width: size.width,
            height: size.height,
        });
    }
    Ok(RgbaImage::new(size.width, size.height))
}

/// Stamp the pen between two points (inclusive)
///
/// Endpoints are clamped to the surface plus the pen radius, so the stamp
/// count is bounded by the surface size.
pub fn draw_segment(raster: &mut RgbaImage, from: (f64, f64), to: (f64, f64)) {
    let reach = f64::from(PEN_RADIUS);
    let (max_x, max_y) = (f64::from(raster.width()) + reach, f64::from(raster.height()) + reach);
    let clamp = |(x, y): (f64, f64)| (x.clamp(-reach, max_x), y.clamp(-reach, max_y));
    let (from, to) = (clamp(from), clamp(to));
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = ((dx.hypot(dy) / STAMP_STEP).ceil() as usize).max(1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = from.0 + dx * t;
        let y = from.1 + dy * t;
        draw_filled_circle_mut(raster, (x.round() as i32, y.round() as i32), PEN_RADIUS, INK);
    }
}

/// Draw a whole stroke; a single-point stroke becomes a dot
pub fn draw_stroke(raster: &mut RgbaImage, stroke: &Stroke) {
    let points = stroke.points();
    match points {
        [] => {}
        [only] => draw_segment(raster, (only.x, only.y), (only.x, only.y)),
        _ => {
            for pair in points.windows(2) {
                draw_segment(raster, (pair[0].x, pair[0].y), (pair[1].x, pair[1].y));
            }
        }
    }
}

/// Rasterize a recording onto a fresh transparent buffer
pub fn render_recording(
    recording: &SignatureRecording,
    size: SurfaceSize,
) -> Result<RgbaImage, CaptureError> {
    let mut raster = blank_raster(size)?;
    for stroke in recording.strokes() {
        draw_stroke(&mut raster, stroke);
    }
    Ok(raster)
}

/// Encode an RGBA raster as PNG
pub fn encode_png(raster: &RgbaImage) -> Result<Vec<u8>, CaptureError> {
    let mut bytes = Vec::new();
    PngEncoder::new(Cursor::new(&mut bytes))
        .write_image(raster.as_raw(), raster.width(), raster.height(), ColorType::Rgba8)
        .map_err(|e| CaptureError::Encode(e.to_string()))?;
    Ok(bytes)
}
