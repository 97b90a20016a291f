//! Stroke geometry recorded by the signature surface

use serde::{Deserialize, Serialize};

/// A sampled pointer position in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    /// Milliseconds since an arbitrary host epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, pressure: None, time: None }
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn with_time(mut self, time: u64) -> Self {
        self.time = Some(time);
        self
    }
}

/// One pointer-down to pointer-up gesture
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub(crate) fn start(point: Point) -> Self {
        Self { points: vec![point] }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Ordered strokes making up one signature (drawing order)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignatureRecording {
    strokes: Vec<Stroke>,
}

impl SignatureRecording {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Put `earlier` strokes in front of the ones recorded since
    pub(crate) fn prepend(&mut self, earlier: SignatureRecording) {
        let later = std::mem::replace(&mut self.strokes, earlier.strokes);
        self.strokes.extend(later);
    }

    pub(crate) fn take(&mut self) -> SignatureRecording {
        std::mem::take(self)
    }

    pub(crate) fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total sampled points across all strokes
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}

impl From<Vec<Stroke>> for SignatureRecording {
    fn from(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }
}
