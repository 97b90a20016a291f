//! Free-hand signature capture
//!
//! `SignatureCapture` owns the drawing surface and the stroke recording. Its
//! lifecycle is an explicit state machine:
//!
//! ```text
//! Empty --begin--> Drawing --end--> NonEmpty --begin--> Drawing ...
//!   ^                                   |
//!   +--------------- clear -------------+
//! ```
//!
//! Only one stroke can be open at a time. A second `begin_stroke` while a stroke
//! is open discards the stale stroke and starts a new one (the pointer-up for the
//! stale gesture was lost by the host).
//!
//! Resizing the host viewport rebuilds the surface. The committed strokes are
//! snapshotted before the rebuild and replayed once the resize notifications
//! have been quiet for `REPLAY_DEBOUNCE`.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::RgbaImage;
use log::debug;

use crate::error::CaptureError;
use crate::raster::{alpha_bounds, blank_raster, draw_segment, draw_stroke, encode_png, render_recording, SurfaceSize};
use crate::scheduler::{Scheduler, TimerToken};
use crate::stroke::{Point, SignatureRecording, Stroke};

/// Fewer points than this is a tap, not a signature
pub const MIN_POINT_COUNT: usize = 10;

/// Minimum drawn-pixel bounding box width (native surface pixels)
pub const MIN_BOUNDS_WIDTH: u32 = 40;

/// Minimum drawn-pixel bounding box height (native surface pixels)
pub const MIN_BOUNDS_HEIGHT: u32 = 15;

/// Quiet period after the last resize before strokes are replayed
pub const REPLAY_DEBOUNCE: Duration = Duration::from_millis(150);

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Observable lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStatus {
    Empty,
    Drawing,
    NonEmpty,
}

enum CaptureState {
    Empty,
    Drawing { open: Stroke },
    NonEmpty,
}

struct PendingReplay {
    token: TimerToken,
    snapshot: SignatureRecording,
}

/// Change observer, called with `is_empty`
pub type SignatureObserver = Box<dyn FnMut(bool)>;

/// Drawing surface plus stroke recording for one signature
pub struct SignatureCapture<S: Scheduler> {
    size: SurfaceSize,
    surface: Option<RgbaImage>,
    recording: SignatureRecording,
    state: CaptureState,
    pending: Option<PendingReplay>,
    scheduler: S,
    observer: Option<SignatureObserver>,
}

impl<S: Scheduler> SignatureCapture<S> {
    pub fn new(size: SurfaceSize, scheduler: S) -> Self {
        let surface = blank_raster(size)
            .map_err(|e| debug!("signature surface not created: {}", e))
            .ok();
        Self {
            size,
            surface,
            recording: SignatureRecording::new(),
            state: CaptureState::Empty,
            pending: None,
            scheduler,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: SignatureObserver) {
        self.observer = Some(observer);
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn status(&self) -> CaptureStatus {
        match self.state {
            CaptureState::Empty => CaptureStatus::Empty,
            CaptureState::Drawing { .. } => CaptureStatus::Drawing,
            CaptureState::NonEmpty => CaptureStatus::NonEmpty,
        }
    }

    /// Live surface pixels for display; `None` while the surface is unavailable
    pub fn surface(&self) -> Option<&RgbaImage> {
        self.surface.as_ref()
    }

    pub fn has_pending_replay(&self) -> bool {
        self.pending.is_some()
    }

    // ===== Gestures =====

    pub fn begin_stroke(&mut self, point: Point) {
        if let CaptureState::Drawing { open } = &self.state {
            debug!("discarding stale open stroke with {} points", open.len());
            self.redraw_surface(None);
        }
        if let Some(surface) = self.surface.as_mut() {
            draw_segment(surface, (point.x, point.y), (point.x, point.y));
        }
        self.state = CaptureState::Drawing { open: Stroke::start(point) };
    }

    /// Extend the open stroke; ignored when no stroke is open
    pub fn extend_stroke(&mut self, point: Point) {
        let CaptureState::Drawing { open } = &mut self.state else {
            return;
        };
        if let (Some(surface), Some(last)) = (self.surface.as_mut(), open.points().last()) {
            draw_segment(surface, (last.x, last.y), (point.x, point.y));
        }
        open.push(point);
    }

    /// Commit the open stroke; ignored when no stroke is open
    pub fn end_stroke(&mut self) {
        let CaptureState::Drawing { open } = std::mem::replace(&mut self.state, CaptureState::Empty) else {
            self.state = self.settled_state();
            return;
        };
        debug!("stroke committed with {} points", open.len());
        self.recording.append(open);
        self.state = CaptureState::NonEmpty;
        self.notify();
    }

    /// Discard every stroke and any pending replay
    pub fn clear(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("clear cancels pending replay {}", pending.token.get());
            self.scheduler.cancel(pending.token);
        }
        self.recording.clear();
        self.state = CaptureState::Empty;
        self.surface = blank_raster(self.size).ok();
        self.notify();
    }

    // ===== Queries =====

    /// True iff no stroke has been committed
    pub fn is_empty(&self) -> bool {
        self.recording.is_empty()
            && self.pending.as_ref().map_or(true, |p| p.snapshot.is_empty())
    }

    /// Committed strokes in drawing order, including any awaiting replay
    pub fn recording(&self) -> SignatureRecording {
        match &self.pending {
            Some(pending) => {
                let mut combined = self.recording.clone();
                combined.prepend(pending.snapshot.clone());
                combined
            }
            None => self.recording.clone(),
        }
    }

    /// Point-count and bounding-box heuristics; both must pass
    pub fn is_valid(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        let recording = self.recording();
        let points = recording.point_count();
        if points < MIN_POINT_COUNT {
            debug!("signature rejected: {} points (< {})", points, MIN_POINT_COUNT);
            return false;
        }
        let raster = match render_recording(&recording, self.size) {
            Ok(raster) => raster,
            Err(e) => {
                debug!("signature rejected: {}", e);
                return false;
            }
        };
        match alpha_bounds(&raster) {
            Some(bounds) if bounds.width() >= MIN_BOUNDS_WIDTH && bounds.height() >= MIN_BOUNDS_HEIGHT => true,
            Some(bounds) => {
                debug!(
                    "signature rejected: bounding box {}x{} px (< {}x{})",
                    bounds.width(),
                    bounds.height(),
                    MIN_BOUNDS_WIDTH,
                    MIN_BOUNDS_HEIGHT
                );
                false
            }
            None => false,
        }
    }

    /// Rasterize committed strokes as a transparent PNG at native resolution
    ///
    /// An empty capture exports a blank image; check `is_valid` first.
    pub fn to_export(&self) -> Result<SignatureExport, CaptureError> {
        let raster = render_recording(&self.recording(), self.size)?;
        Ok(SignatureExport::from_png_bytes(encode_png(&raster)?))
    }

    // ===== Resize replay =====

    /// Host viewport changed; rebuild the surface and schedule a replay
    ///
    /// Committed strokes are snapshotted and replayed later. An open stroke
    /// stays open and is redrawn at once so the gesture can continue.
    pub fn notify_resize(&mut self, size: SurfaceSize) {
        let mut snapshot = self.recording.take();
        if let Some(pending) = self.pending.take() {
            self.scheduler.cancel(pending.token);
            snapshot.prepend(pending.snapshot);
        }

        self.size = size;
        self.surface = blank_raster(size)
            .map_err(|e| debug!("surface unavailable after resize: {}", e))
            .ok();
        if let (Some(surface), CaptureState::Drawing { open }) = (self.surface.as_mut(), &self.state) {
            draw_stroke(surface, open);
        }

        if !snapshot.is_empty() {
            let token = self.scheduler.schedule(REPLAY_DEBOUNCE);
            debug!(
                "resize to {}x{}: {} strokes snapshotted, replay {} scheduled",
                size.width,
                size.height,
                snapshot.strokes().len(),
                token.get()
            );
            self.pending = Some(PendingReplay { token, snapshot });
        }
        if !matches!(self.state, CaptureState::Drawing { .. }) {
            self.state = self.settled_state();
        }
    }

    /// Deliver a fired timer; returns true when it triggered the replay
    pub fn handle_timer(&mut self, token: TimerToken) -> bool {
        let pending = match self.pending.take() {
            Some(pending) if pending.token == token => pending,
            other => {
                self.pending = other;
                return false;
            }
        };
        debug!("replaying {} strokes", pending.snapshot.strokes().len());
        self.recording.prepend(pending.snapshot);

        let open = match std::mem::replace(&mut self.state, CaptureState::Empty) {
            CaptureState::Drawing { open } => Some(open),
            _ => None,
        };
        self.redraw_surface(open.as_ref());
        self.state = match open {
            Some(open) => CaptureState::Drawing { open },
            None => self.settled_state(),
        };
        self.notify();
        true
    }

    fn redraw_surface(&mut self, open: Option<&Stroke>) {
        self.surface = render_recording(&self.recording, self.size).ok();
        if let (Some(surface), Some(open)) = (self.surface.as_mut(), open) {
            draw_stroke(surface, open);
        }
    }

    fn settled_state(&self) -> CaptureState {
        if self.is_empty() {
            CaptureState::Empty
        } else {
            CaptureState::NonEmpty
        }
    }

    fn notify(&mut self) {
        let is_empty = self.is_empty();
        if let Some(observer) = self.observer.as_mut() {
            observer(is_empty);
        }
    }
}

impl<S: Scheduler> fmt::Debug for SignatureCapture<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureCapture")
            .field("size", &self.size)
            .field("status", &self.status())
            .field("strokes", &self.recording().strokes().len())
            .field("pending_replay", &self.has_pending_replay())
            .finish()
    }
}

/// Encoded PNG of a signature, derived from the recording at export time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureExport {
    png: Vec<u8>,
}

impl SignatureExport {
    /// Wrap raw bytes; they are only decoded when the contract is generated
    pub fn from_png_bytes(png: Vec<u8>) -> Self {
        Self { png }
    }

    /// Accept a `data:image/png;base64,` URL; anything else yields an
    /// export the generator will report as undecodable
    pub fn from_data_url(url: &str) -> Self {
        let decoded = url
            .strip_prefix(PNG_DATA_URL_PREFIX)
            .and_then(|payload| BASE64.decode(payload.trim()).ok());
        match decoded {
            Some(png) => Self { png },
            None => {
                debug!("signature data URL not decodable ({} chars)", url.len());
                Self { png: url.as_bytes().to_vec() }
            }
        }
    }

    pub fn to_data_url(&self) -> String {
        format!("{}{}", PNG_DATA_URL_PREFIX, BASE64.encode(&self.png))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Decode back into pixels
    pub fn decode(&self) -> Result<RgbaImage, image::ImageError> {
        Ok(image::load_from_memory_with_format(&self.png, image::ImageFormat::Png)?.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn capture() -> SignatureCapture<ManualScheduler> {
        SignatureCapture::new(SurfaceSize::new(300, 150), ManualScheduler::new())
    }

    fn draw_line(capture: &mut SignatureCapture<ManualScheduler>, from: (f64, f64), to: (f64, f64), points: usize) {
        capture.begin_stroke(Point::new(from.0, from.1));
        for i in 1..points {
            let t = i as f64 / (points - 1) as f64;
            capture.extend_stroke(Point::new(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t));
        }
        capture.end_stroke();
    }

    #[test]
    fn test_new_capture_is_empty() {
        let capture = capture();
        assert!(capture.is_empty());
        assert!(!capture.is_valid());
        assert_eq!(capture.status(), CaptureStatus::Empty);
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut capture = capture();
        capture.begin_stroke(Point::new(10.0, 10.0));
        assert_eq!(capture.status(), CaptureStatus::Drawing);
        assert!(capture.is_empty());
        capture.extend_stroke(Point::new(20.0, 20.0));
        capture.end_stroke();
        assert_eq!(capture.status(), CaptureStatus::NonEmpty);
        assert!(!capture.is_empty());
        capture.clear();
        assert_eq!(capture.status(), CaptureStatus::Empty);
        assert!(capture.is_empty());
    }

    #[test]
    fn test_second_begin_replaces_stale_stroke() {
        let mut capture = capture();
        capture.begin_stroke(Point::new(1.0, 1.0));
        capture.extend_stroke(Point::new(2.0, 2.0));
        capture.begin_stroke(Point::new(50.0, 50.0));
        capture.end_stroke();
        let recording = capture.recording();
        assert_eq!(recording.strokes().len(), 1);
        assert_eq!(recording.strokes()[0].points(), &[Point::new(50.0, 50.0)]);
    }

    #[test]
    fn test_gesture_events_without_open_stroke_are_ignored() {
        let mut capture = capture();
        capture.extend_stroke(Point::new(5.0, 5.0));
        capture.end_stroke();
        assert!(capture.is_empty());
        assert_eq!(capture.status(), CaptureStatus::Empty);
    }

    #[test]
    fn test_tap_is_not_valid() {
        let mut capture = capture();
        capture.begin_stroke(Point::new(40.0, 40.0));
        capture.end_stroke();
        assert!(!capture.is_empty());
        assert!(!capture.is_valid());
    }

    #[test]
    fn test_few_points_fail_even_when_large() {
        let mut capture = capture();
        draw_line(&mut capture, (10.0, 10.0), (200.0, 100.0), 9);
        assert!(!capture.is_valid());
    }

    #[test]
    fn test_horizontal_flick_fails_bounding_box() {
        let mut capture = capture();
        draw_line(&mut capture, (10.0, 60.0), (250.0, 60.0), 30);
        assert!(!capture.is_valid());
    }

    #[test]
    fn test_vertical_scribble_fails_bounding_box() {
        let mut capture = capture();
        draw_line(&mut capture, (100.0, 10.0), (110.0, 140.0), 30);
        assert!(!capture.is_valid());
    }

    #[test]
    fn test_diagonal_signature_is_valid() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        assert!(capture.is_valid());
    }

    #[test]
    fn test_points_accumulate_across_strokes() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 20.0), 5);
        draw_line(&mut capture, (20.0, 20.0), (20.0, 50.0), 5);
        assert!(capture.is_valid());
    }

    #[test]
    fn test_unavailable_surface_is_never_valid() {
        let mut capture = SignatureCapture::new(SurfaceSize::new(0, 0), ManualScheduler::new());
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        assert!(!capture.is_empty());
        assert!(capture.surface().is_none());
        assert!(!capture.is_valid());
        assert!(capture.to_export().is_err());
    }

    #[test]
    fn test_clear_then_export_is_transparent() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        capture.clear();
        let raster = capture.to_export().unwrap().decode().unwrap();
        assert_eq!(raster.dimensions(), (300, 150));
        assert!(raster.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_export_has_native_dimensions_and_ink() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        let raster = capture.to_export().unwrap().decode().unwrap();
        assert_eq!(raster.dimensions(), (300, 150));
        let bounds = alpha_bounds(&raster).unwrap();
        assert!(bounds.width() >= 60 && bounds.height() >= 25);
    }

    #[test]
    fn test_live_surface_tracks_drawing() {
        let mut capture = capture();
        capture.begin_stroke(Point::new(10.0, 10.0));
        capture.extend_stroke(Point::new(60.0, 10.0));
        let live = alpha_bounds(capture.surface().unwrap()).unwrap();
        assert_eq!((live.min_x, live.max_x), (9, 61));
    }

    #[test]
    fn test_resize_replays_after_debounce() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        draw_line(&mut capture, (30.0, 60.0), (90.0, 60.0), 4);
        let before = capture.recording();

        capture.notify_resize(SurfaceSize::new(320, 160));
        assert!(capture.has_pending_replay());
        assert!(alpha_bounds(capture.surface().unwrap()).is_none());
        assert!(!capture.is_empty());

        assert!(capture.scheduler_mut().advance(Duration::from_millis(100)).is_empty());
        let fired = capture.scheduler_mut().advance(Duration::from_millis(50));
        assert_eq!(fired.len(), 1);
        assert!(capture.handle_timer(fired[0]));

        assert_eq!(capture.recording(), before);
        assert!(!capture.has_pending_replay());
        assert!(alpha_bounds(capture.surface().unwrap()).is_some());
        assert_eq!(capture.status(), CaptureStatus::NonEmpty);
    }

    #[test]
    fn test_rapid_resizes_coalesce_into_one_replay() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        let before = capture.recording();

        let mut fired = Vec::new();
        for width in [310, 320, 330, 340] {
            capture.notify_resize(SurfaceSize::new(width, 150));
            fired.extend(capture.scheduler_mut().advance(Duration::from_millis(40)));
        }
        assert!(fired.is_empty());
        assert_eq!(capture.scheduler().pending_count(), 1);

        fired = capture.scheduler_mut().advance(REPLAY_DEBOUNCE);
        let replays = fired.into_iter().filter(|t| capture.handle_timer(*t)).count();
        assert_eq!(replays, 1);
        assert_eq!(capture.recording(), before);
        assert_eq!(capture.size(), SurfaceSize::new(340, 150));
    }

    #[test]
    fn test_gesture_continues_across_resize() {
        let mut capture = capture();
        capture.begin_stroke(Point::new(10.0, 10.0));
        for i in 1..5 {
            capture.extend_stroke(Point::new(10.0 + 4.0 * i as f64, 10.0 + 2.0 * i as f64));
        }
        capture.notify_resize(SurfaceSize::new(300, 200));
        assert_eq!(capture.status(), CaptureStatus::Drawing);
        for i in 5..15 {
            capture.extend_stroke(Point::new(10.0 + 4.0 * i as f64, 10.0 + 2.0 * i as f64));
        }
        capture.end_stroke();
        for token in capture.scheduler_mut().advance(REPLAY_DEBOUNCE) {
            capture.handle_timer(token);
        }
        let recording = capture.recording();
        assert_eq!(recording.strokes().len(), 1);
        assert_eq!(recording.point_count(), 15);
        assert!(capture.is_valid());
    }

    #[test]
    fn test_resize_keeps_committed_strokes_before_open_stroke() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        capture.begin_stroke(Point::new(100.0, 20.0));
        capture.notify_resize(SurfaceSize::new(320, 160));
        capture.extend_stroke(Point::new(110.0, 30.0));
        let due = capture.scheduler_mut().advance(REPLAY_DEBOUNCE);
        assert!(capture.handle_timer(due[0]));
        assert_eq!(capture.status(), CaptureStatus::Drawing);
        capture.end_stroke();
        let recording = capture.recording();
        assert_eq!(recording.strokes()[0].len(), 12);
        assert_eq!(recording.strokes()[1].len(), 2);
    }

    #[test]
    fn test_strokes_during_debounce_follow_snapshot() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 20.0), 3);
        capture.notify_resize(SurfaceSize::new(300, 180));
        draw_line(&mut capture, (20.0, 50.0), (80.0, 50.0), 4);
        for token in capture.scheduler_mut().advance(REPLAY_DEBOUNCE) {
            capture.handle_timer(token);
        }
        let recording = capture.recording();
        assert_eq!(recording.strokes()[0].len(), 3);
        assert_eq!(recording.strokes()[1].len(), 4);
    }

    #[test]
    fn test_clear_cancels_pending_replay() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        capture.notify_resize(SurfaceSize::new(320, 160));
        capture.clear();
        assert_eq!(capture.scheduler().pending_count(), 0);

        let fired = capture.scheduler_mut().advance(Duration::from_secs(1));
        assert!(fired.is_empty());
        assert!(capture.is_empty());
        assert!(alpha_bounds(capture.surface().unwrap()).is_none());
    }

    #[test]
    fn test_stale_token_does_not_replay() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        capture.notify_resize(SurfaceSize::new(320, 160));
        let stale = capture.scheduler_mut().schedule(Duration::ZERO);
        assert!(!capture.handle_timer(stale));
        assert!(capture.has_pending_replay());
    }

    #[test]
    fn test_resize_of_empty_capture_schedules_nothing() {
        let mut capture = capture();
        capture.notify_resize(SurfaceSize::new(200, 100));
        assert!(!capture.has_pending_replay());
        assert_eq!(capture.scheduler().pending_count(), 0);
    }

    #[test]
    fn test_observer_sees_commit_and_clear() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut capture = capture();
        capture.set_observer(Box::new(move |is_empty| sink.borrow_mut().push(is_empty)));
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        capture.clear();
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn test_observer_notified_after_replay() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut capture = capture();
        capture.set_observer(Box::new(move |is_empty| sink.borrow_mut().push(is_empty)));
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        capture.notify_resize(SurfaceSize::new(280, 140));
        assert_eq!(*seen.borrow(), vec![false]);
        let due = capture.scheduler_mut().advance(REPLAY_DEBOUNCE);
        assert_eq!(due.len(), 1);
        assert!(capture.handle_timer(due[0]));
        assert_eq!(*seen.borrow(), vec![false, false]);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        // Same numbering as the capture's scheduler: this is the first token it hands out
        let superseded = ManualScheduler::new().schedule(REPLAY_DEBOUNCE);
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        capture.notify_resize(SurfaceSize::new(280, 140));
        assert!(capture.scheduler_mut().advance(Duration::from_millis(50)).is_empty());
        capture.notify_resize(SurfaceSize::new(290, 140));
        let due = capture.scheduler_mut().advance(REPLAY_DEBOUNCE);
        assert_eq!(due.len(), 1);
        assert_ne!(due[0], superseded);
        assert!(!capture.handle_timer(superseded));
        assert!(capture.has_pending_replay());
        assert!(capture.handle_timer(due[0]));
    }

    #[test]
    fn test_data_url_round_trip() {
        let mut capture = capture();
        draw_line(&mut capture, (20.0, 20.0), (80.0, 45.0), 12);
        let export = capture.to_export().unwrap();
        let url = export.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(SignatureExport::from_data_url(&url), export);
    }

    #[test]
    fn test_malformed_data_url_is_not_decodable() {
        let export = SignatureExport::from_data_url("data:image/jpeg;base64,???");
        assert!(export.decode().is_err());
    }
}
