//! Catalogue entries published by the search service

use serde::{Deserialize, Serialize};

/// Calculation the server offers, as listed by `search/calcs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub value_type: String,
}
