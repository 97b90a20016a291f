//! Contract request assembled from one form submission

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

use crate::signature::SignatureExport;
use crate::vehicle::{RenterInfo, Vehicle};

static LAST_ISSUE_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Current time, strictly later than any previous issuance in this process
///
/// Two submissions in the same millisecond get distinct timestamps, so
/// contract ids and filenames never collide.
pub fn next_issue_time() -> DateTime<Utc> {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUE_MILLIS.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ISSUE_MILLIS.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => {
                return Utc
                    .timestamp_millis_opt(candidate)
                    .single()
                    .unwrap_or_else(Utc::now);
            }
            Err(actual) => last = actual,
        }
    }
}

/// Everything the generator needs for one contract; never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct ContractRequest {
    pub vehicle: Vehicle,
    pub renter: RenterInfo,
    pub signature: SignatureExport,
    pub issued_at: DateTime<Utc>,
}

impl ContractRequest {
    pub fn new(vehicle: Vehicle, renter: RenterInfo, signature: SignatureExport, issued_at: DateTime<Utc>) -> Self {
        Self { vehicle, renter, signature, issued_at }
    }

    /// `<vehicle id>-<issuance millis>`
    pub fn contract_id(&self) -> String {
        format!("{}-{}", self.vehicle.id, self.issued_at.timestamp_millis())
    }

    /// `rental-<vehicle id>-<issuance millis>.pdf`
    pub fn filename(&self) -> String {
        format!("rental-{}-{}.pdf", self.vehicle.id, self.issued_at.timestamp_millis())
    }

    /// Long English date, e.g. "October 18, 2026"
    pub fn formatted_date(&self) -> String {
        self.issued_at.format("%B %-d, %Y").to_string()
    }
}
