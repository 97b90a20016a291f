//! Vehicle and renter records supplied by the catalog and the rental form

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A rentable machine as published by the catalog (read-only here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Label key -> value; insertion order is the display order
    #[serde(default)]
    pub specifications: IndexMap<String, Option<String>>,
    pub daily_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Vehicle {
    /// Specifications that actually carry a value
    pub fn present_specifications(&self) -> impl Iterator<Item = (&str, &str)> {
        self.specifications.iter().filter_map(|(key, value)| match value.as_deref() {
            Some(value) if !value.trim().is_empty() => Some((key.as_str(), value)),
            _ => None,
        })
    }
}

/// Renter name as entered in the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenterInfo {
    pub first_name: String,
    pub last_name: String,
}

impl RenterInfo {
    /// Build from raw form input, trimming both fields
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Read-only source of vehicles
pub trait Catalog {
    fn vehicles(&self) -> &[Vehicle];

    fn vehicle_by_id(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles().iter().find(|v| v.id == id)
    }
}

/// In-memory catalog, e.g. loaded from the site's vehicle JSON
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    vehicles: Vec<Vehicle>,
}

impl StaticCatalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl Catalog for StaticCatalog {
    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}
