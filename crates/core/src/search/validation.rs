//! Local checks applied before any search request is sent

use std::ops::RangeInclusive;

use fragnet_domain::constants::{MAX_EXPANSION_HOPS, MAX_HOPS, MAX_LIMIT, MIN_HOPS, MIN_LIMIT};
use fragnet_domain::{Calculation, ExpansionQuery, NeighbourhoodQuery, ValidationError};
use tracing::debug;

/// Reject a blank query molecule
///
/// # Errors
/// Returns `EmptySmiles` if `smiles` is empty after trimming whitespace.
pub fn validate_smiles(smiles: &str) -> Result<(), ValidationError> {
    if smiles.trim().is_empty() {
        return Err(ValidationError::EmptySmiles);
    }
    Ok(())
}

/// Check a neighbourhood query and resolve its calculation names
///
/// Checks run in a fixed order and the first failure wins: SMILES, heavy
/// atom count, ring atom count, hops, limit, then each calculation in the
/// order given.
///
/// # Errors
/// Returns the [`ValidationError`] of the first failing check.
pub fn validate_neighbourhood(
    query: &NeighbourhoodQuery,
) -> Result<Vec<Calculation>, ValidationError> {
    validate_graph_bounds(&query.smiles, query.hac, query.rac, query.hops, MIN_HOPS..=MAX_HOPS)?;

    if !(MIN_LIMIT..=MAX_LIMIT).contains(&query.limit) {
        return Err(ValidationError::InvalidLimit(query.limit));
    }

    let calculations = query
        .calculations
        .iter()
        .map(|name| name.parse::<Calculation>())
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| debug!(reason = %e, "Rejected calculation"))?;

    Ok(calculations)
}

/// Check an expansion query
///
/// Same order as the neighbourhood checks, with up to three hops allowed.
///
/// # Errors
/// Returns the [`ValidationError`] of the first failing check.
pub fn validate_expansion(query: &ExpansionQuery) -> Result<(), ValidationError> {
    validate_graph_bounds(
        &query.smiles,
        query.hac,
        query.rac,
        query.hops,
        MIN_HOPS..=MAX_EXPANSION_HOPS,
    )
}

fn validate_graph_bounds(
    smiles: &str,
    hac: i64,
    rac: i64,
    hops: i64,
    allowed_hops: RangeInclusive<i64>,
) -> Result<(), ValidationError> {
    validate_smiles(smiles)?;

    if hac < 0 {
        return Err(ValidationError::InvalidHac(hac));
    }
    if rac < 0 {
        return Err(ValidationError::InvalidRac(rac));
    }
    if !allowed_hops.contains(&hops) {
        return Err(ValidationError::InvalidHops(hops));
    }
    Ok(())
}
