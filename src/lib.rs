//! Rental contracts for ConstructRent
//!
//! Two cooperating parts:
//!
//! - [`SignatureCapture`] records free-hand strokes on a raster surface,
//!   answers emptiness/validity queries and exports a transparent PNG.
//!   Resizes are survived by snapshotting the strokes and replaying them
//!   through an injected [`Scheduler`].
//! - [`ContractDocumentGenerator`] lays out a paginated A4 contract as
//!   positioned draw commands; [`PdfRenderer`] encodes that layout with
//!   pdf-writer.
//!
//! [`submit`] ties them together for one form submission.

mod canvas;
mod font_metrics;
mod geometry;
mod image_utils;
mod text_layout;
mod unicode_utils;

pub mod contract;
pub mod error;
pub mod generator;
pub mod layout;
pub mod raster;
pub mod renderer;
pub mod scheduler;
pub mod signature;
pub mod stroke;
pub mod submission;
pub mod template;
pub mod types;
pub mod vehicle;

pub use contract::{next_issue_time, ContractRequest};
pub use error::{CaptureError, Field, RendererError, RendererResult, SubmitError, ValidationError, ValidationErrors};
pub use generator::{ContractDocumentGenerator, SIGNATURE_PLACEHOLDER};
pub use layout::{ContractDocument, DrawCommand, LayoutPage, Section};
pub use raster::SurfaceSize;
pub use renderer::{render_pdf, PdfRenderer};
pub use scheduler::{ManualScheduler, Scheduler, TimerToken};
pub use signature::{CaptureStatus, SignatureCapture, SignatureExport, REPLAY_DEBOUNCE};
pub use stroke::{Point, SignatureRecording, Stroke};
pub use submission::{
    submit, validate_submission, validate_submission_at, DirectorySink, DocumentSink, MemorySink, SubmissionReceipt,
};
pub use template::ContractTemplate;
pub use vehicle::{Catalog, RenterInfo, StaticCatalog, Vehicle};
