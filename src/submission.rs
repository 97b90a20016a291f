//! Rental form submission: validation, generation and hand-off to the host sink

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{info, warn};

use crate::contract::{next_issue_time, ContractRequest};
use crate::error::{SubmitError, ValidationError, ValidationErrors};
use crate::generator::ContractDocumentGenerator;
use crate::renderer::render_pdf;
use crate::scheduler::Scheduler;
use crate::signature::SignatureCapture;
use crate::text_layout::format_rate;
use crate::vehicle::{RenterInfo, Vehicle};

/// Host-provided destination for the finished document bytes
pub trait DocumentSink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes documents into a directory, creating it on first use
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl DocumentSink for DirectorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(filename);
        fs::write(&path, bytes)?;
        info!("Contract saved to {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Keeps documents in memory, keyed by filename
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    documents: IndexMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filename: &str) -> Option<&[u8]> {
        self.documents.get(filename).map(Vec::as_slice)
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSink for MemorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        self.documents.insert(filename.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Summary shown to the renter once the contract has been produced
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub contract_id: String,
    pub filename: String,
    pub page_count: usize,
    pub vehicle_name: String,
    pub renter_name: String,
    pub daily_rate: String,
    pub date: String,
}

/// Check the form and build the request that the generator consumes
///
/// All field errors are collected; nothing is generated unless the list is empty.
pub fn validate_submission<S: Scheduler>(
    first_name: &str,
    last_name: &str,
    vehicle: &Vehicle,
    capture: &SignatureCapture<S>,
) -> Result<ContractRequest, ValidationErrors> {
    validate_submission_at(first_name, last_name, vehicle, capture, next_issue_time())
}

/// Same as `validate_submission` with a caller-chosen issuance time
pub fn validate_submission_at<S: Scheduler>(
    first_name: &str,
    last_name: &str,
    vehicle: &Vehicle,
    capture: &SignatureCapture<S>,
    issued_at: DateTime<Utc>,
) -> Result<ContractRequest, ValidationErrors> {
    let renter = RenterInfo::new(first_name, last_name);
    let mut errors = Vec::new();

    if renter.first_name.is_empty() {
        errors.push(ValidationError::FirstNameRequired);
    }
    if renter.last_name.is_empty() {
        errors.push(ValidationError::LastNameRequired);
    }

    let mut signature = None;
    if capture.is_empty() {
        errors.push(ValidationError::SignatureRequired);
    } else if !capture.is_valid() {
        errors.push(ValidationError::SignatureIncomplete);
    } else {
        match capture.to_export() {
            Ok(export) => signature = Some(export),
            Err(e) => {
                warn!("signature export failed: {}", e);
                errors.push(ValidationError::SignatureIncomplete);
            }
        }
    }

    if vehicle.daily_rate.is_nan() || vehicle.daily_rate <= 0.0 {
        errors.push(ValidationError::InvalidDailyRate(vehicle.daily_rate));
    }

    match signature {
        Some(signature) if errors.is_empty() => {
            Ok(ContractRequest::new(vehicle.clone(), renter, signature, issued_at))
        }
        _ => Err(ValidationErrors::new(errors)),
    }
}

/// Validate, lay out, encode and hand the PDF to `sink`
pub fn submit<S, K>(
    first_name: &str,
    last_name: &str,
    vehicle: &Vehicle,
    capture: &SignatureCapture<S>,
    generator: &ContractDocumentGenerator,
    sink: &mut K,
) -> Result<SubmissionReceipt, SubmitError>
where
    S: Scheduler,
    K: DocumentSink + ?Sized,
{
    let request = validate_submission(first_name, last_name, vehicle, capture).map_err(|errors| {
        info!("submission blocked: {}", errors);
        errors
    })?;
    let document = generator.generate(&request);
    let bytes = render_pdf(&document)?;
    sink.save(&document.filename, &bytes).map_err(SubmitError::Sink)?;

    Ok(SubmissionReceipt {
        contract_id: document.contract_id.clone(),
        filename: document.filename.clone(),
        page_count: document.page_count(),
        vehicle_name: request.vehicle.name.clone(),
        renter_name: request.renter.full_name(),
        daily_rate: format_rate(request.vehicle.daily_rate),
        date: request.formatted_date(),
    })
}
