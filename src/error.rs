//! Error types for signature capture, contract validation and PDF rendering
//!
//! Each concern gets its own enum. Only `ValidationErrors` and `RendererError`
//! are meant to reach the host; surface and embedding problems are absorbed
//! where they occur (see `SignatureCapture::is_valid` and the generator).

use std::fmt;

use thiserror::Error;

/// Errors raised by the drawing surface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Drawing surface unavailable ({width}x{height} px)")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("Failed to encode signature raster: {0}")]
    Encode(String),
}

/// Form field a validation error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Signature,
    DailyRate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Signature => "signature",
            Field::DailyRate => "dailyRate",
        }
    }
}

/// A single field-level validation failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("First name is required")]
    FirstNameRequired,

    #[error("Last name is required")]
    LastNameRequired,

    #[error("Signature is required")]
    SignatureRequired,

    #[error("Please draw a complete signature (not just a dot)")]
    SignatureIncomplete,

    #[error("Daily rate must be a positive amount, got {0}")]
    InvalidDailyRate(f64),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::FirstNameRequired => Field::FirstName,
            ValidationError::LastNameRequired => Field::LastName,
            ValidationError::SignatureRequired | ValidationError::SignatureIncomplete => {
                Field::Signature
            }
            ValidationError::InvalidDailyRate(_) => Field::DailyRate,
        }
    }
}

/// All validation failures of one submission, in form order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Error attached to `field`, if any
    pub fn for_field(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.errors.contains(error)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field().as_str(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Custom error type for PDF renderer operations
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for renderer operations
pub type RendererResult<T> = Result<T, RendererError>;

/// Errors surfaced by a full submission
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Submission blocked: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Render(#[from] RendererError),

    #[error("Failed to save contract document: {0}")]
    Sink(std::io::Error),
}
