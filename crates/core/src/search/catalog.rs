//! Content transforms for the catalogue endpoints

use fragnet_domain::{CalculationInfo, SearchOutcome};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct NamedEntry {
    name: String,
}

/// Supplier names from a `search/suppliers` body, in server order
///
/// # Errors
/// Returns `MalformedSupplierList` if the body is absent or is not a list of
/// objects each carrying a string `name`.
pub fn supplier_names(body: Option<Value>) -> Result<Vec<String>, SearchOutcome> {
    let body = body.ok_or_else(|| {
        SearchOutcome::MalformedSupplierList("response body is not JSON".to_string())
    })?;

    let entries: Vec<NamedEntry> = serde_json::from_value(body)
        .map_err(|e| SearchOutcome::MalformedSupplierList(e.to_string()))?;

    Ok(entries.into_iter().map(|entry| entry.name).collect())
}

/// Calculation descriptions from a `search/calcs` body, in server order
///
/// # Errors
/// Returns `MalformedCalculationList` if the body is absent or not a list of
/// calculation entries.
pub fn calculation_list(body: Option<Value>) -> Result<Vec<CalculationInfo>, SearchOutcome> {
    let body = body.ok_or_else(|| {
        SearchOutcome::MalformedCalculationList("response body is not JSON".to_string())
    })?;

    serde_json::from_value(body).map_err(|e| SearchOutcome::MalformedCalculationList(e.to_string()))
}
