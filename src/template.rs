//! Contract wording
//!
//! Everything printed verbatim on the contract lives here so a deployment can
//! swap branding or clauses through JSON without touching the layout code.

use serde::{Deserialize, Serialize};

/// Text blocks printed on every contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractTemplate {
    pub company_name: String,
    pub tagline: String,
    pub title: String,
    pub terms: Vec<String>,
    pub footer: String,
}

impl Default for ContractTemplate {
    fn default() -> Self {
        Self {
            company_name: "CONSTRUCTRENT".to_string(),
            tagline: "Construction Vehicle Rental Agreement".to_string(),
            title: "RENTAL CONTRACT".to_string(),
            terms: vec![
                "The renter agrees to use the vehicle only for its intended purpose.".to_string(),
                "The renter is responsible for any damage to the vehicle during the rental period."
                    .to_string(),
                "Payment is due upon completion of the rental period.".to_string(),
                "The vehicle must be returned in the same condition as received.".to_string(),
                "The renter must have appropriate licenses and certifications to operate the vehicle."
                    .to_string(),
            ],
            footer: concat!(
                "This is a digitally generated rental agreement. ",
                "For questions, please contact ConstructRent support."
            )
            .to_string(),
        }
    }
}

impl ContractTemplate {
    /// Parse a template; omitted keys fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
