//! Search request and result types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::INTERNAL_ERROR_CODE;
use crate::errors::ValidationError;

/// Calculation the server can run on every neighbourhood result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Calculation {
    Logp,
    Tpsa,
    SimRdkitTanimoto,
    SimMorgan2Tanimoto,
    SimMorgan3Tanimoto,
}

impl Calculation {
    /// The allow-list, in the order the service documents it.
    pub const ALL: [Self; 5] = [
        Self::Logp,
        Self::Tpsa,
        Self::SimRdkitTanimoto,
        Self::SimMorgan2Tanimoto,
        Self::SimMorgan3Tanimoto,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logp => "LOGP",
            Self::Tpsa => "TPSA",
            Self::SimRdkitTanimoto => "SIM_RDKIT_TANIMOTO",
            Self::SimMorgan2Tanimoto => "SIM_MORGAN2_TANIMOTO",
            Self::SimMorgan3Tanimoto => "SIM_MORGAN3_TANIMOTO",
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Calculation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|calc| calc.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidCalculation(s.to_string()))
    }
}

/// Parameters of a `search/neighbourhood` query.
///
/// Values are kept exactly as the caller supplied them; nothing is checked
/// until the query is validated, so out-of-range bounds and unknown
/// calculation names are representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighbourhoodQuery {
    /// Query molecule (SMILES), unescaped
    pub smiles: String,
    /// Heavy atom count bound
    pub hac: i64,
    /// Ring atom count bound
    pub rac: i64,
    /// Number of graph edges to traverse
    pub hops: i64,
    /// Maximum number of results
    pub limit: i64,
    /// Calculation identifiers, may be empty
    #[serde(default)]
    pub calculations: Vec<String>,
    /// Supplier names to restrict results to, may be empty
    #[serde(default)]
    pub suppliers: Vec<String>,
}

impl NeighbourhoodQuery {
    #[must_use]
    pub fn new(smiles: impl Into<String>, hac: i64, rac: i64, hops: i64, limit: i64) -> Self {
        Self {
            smiles: smiles.into(),
            hac,
            rac,
            hops,
            limit,
            calculations: Vec::new(),
            suppliers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_calculations<I, S>(mut self, calculations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.calculations = calculations.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_suppliers<I, S>(mut self, suppliers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppliers = suppliers.into_iter().map(Into::into).collect();
        self
    }
}

/// Parameters of a `search/expand` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionQuery {
    pub smiles: String,
    /// Maximum change in heavy atom count
    pub hac: i64,
    /// Maximum change in ring atom count
    pub rac: i64,
    pub hops: i64,
    #[serde(default)]
    pub suppliers: Vec<String>,
}

impl ExpansionQuery {
    #[must_use]
    pub fn new(smiles: impl Into<String>, hac: i64, rac: i64, hops: i64) -> Self {
        Self { smiles: smiles.into(), hac, rac, hops, suppliers: Vec::new() }
    }

    #[must_use]
    pub fn with_suppliers<I, S>(mut self, suppliers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppliers = suppliers.into_iter().map(Into::into).collect();
        self
    }
}

/// Message half of a [`SearchResult`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The server answered; the status code says how
    Success,
    /// Rejected locally, no request was made
    Invalid(ValidationError),
    /// No valid access token could be obtained
    ApiTokenRefreshFailure,
    /// The request exceeded the configured timeout
    RequestTimeout,
    /// Any other transport-level failure
    Transport(String),
    /// The suppliers body was absent or not a list of named entries
    MalformedSupplierList(String),
    /// The calculations body was absent or not a list of calculation entries
    MalformedCalculationList(String),
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Invalid(reason) => write!(f, "{reason}"),
            Self::ApiTokenRefreshFailure => f.write_str("APITokenRefreshFailure"),
            Self::RequestTimeout => f.write_str("RequestTimeout"),
            Self::Transport(msg) => write!(f, "TransportError: {msg}"),
            Self::MalformedSupplierList(msg) => write!(f, "MalformedSupplierList: {msg}"),
            Self::MalformedCalculationList(msg) => write!(f, "MalformedCalculationList: {msg}"),
        }
    }
}

/// Uniform result of every search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<T> {
    /// HTTP status, or [`INTERNAL_ERROR_CODE`] when no response was received
    pub status_code: u16,
    pub message: SearchOutcome,
    /// Parsed body, absent when there was none or it could not be parsed
    pub content: Option<T>,
}

impl<T> SearchResult<T> {
    /// A response was received from the server.
    #[must_use]
    pub const fn success(status_code: u16, content: Option<T>) -> Self {
        Self { status_code, message: SearchOutcome::Success, content }
    }

    /// A client-side failure, reported with the internal error code.
    #[must_use]
    pub const fn internal(message: SearchOutcome) -> Self {
        Self { status_code: INTERNAL_ERROR_CODE, message, content: None }
    }

    #[must_use]
    pub const fn rejected(reason: ValidationError) -> Self {
        Self::internal(SearchOutcome::Invalid(reason))
    }

    /// True when the server was reached, regardless of the HTTP status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.message, SearchOutcome::Success)
    }

    /// Transform the content of a successful result, keeping its status code.
    ///
    /// Failed results pass through unchanged.
    pub fn and_then_content<U, F>(self, transform: F) -> SearchResult<U>
    where
        F: FnOnce(Option<T>) -> Result<U, SearchOutcome>,
    {
        match self.message {
            SearchOutcome::Success => match transform(self.content) {
                Ok(content) => SearchResult::success(self.status_code, Some(content)),
                Err(message) => {
                    SearchResult { status_code: self.status_code, message, content: None }
                }
            },
            message => SearchResult { status_code: self.status_code, message, content: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculations_parse_from_allow_list_only() {
        for calc in Calculation::ALL {
            assert_eq!(calc.as_str().parse::<Calculation>(), Ok(calc));
        }
        assert_eq!(
            "logp".parse::<Calculation>(),
            Err(ValidationError::InvalidCalculation("logp".to_string()))
        );
    }

    #[test]
    fn calculation_serde_uses_wire_names() {
        let json = serde_json::to_string(&Calculation::SimMorgan2Tanimoto).unwrap();
        assert_eq!(json, "\"SIM_MORGAN2_TANIMOTO\"");
    }

    #[test]
    fn outcome_messages_match_wire_strings() {
        assert_eq!(SearchOutcome::Success.to_string(), "Success");
        assert_eq!(SearchOutcome::ApiTokenRefreshFailure.to_string(), "APITokenRefreshFailure");
        assert_eq!(SearchOutcome::RequestTimeout.to_string(), "RequestTimeout");
        assert_eq!(
            SearchOutcome::Invalid(ValidationError::InvalidHops(0)).to_string(),
            "InvalidHops (0)"
        );
    }

    #[test]
    fn internal_results_carry_reserved_code_and_no_content() {
        let result: SearchResult<()> = SearchResult::internal(SearchOutcome::RequestTimeout);
        assert_eq!(result.status_code, INTERNAL_ERROR_CODE);
        assert!(result.content.is_none());
        assert!(!result.is_success());
    }

    #[test]
    fn and_then_content_keeps_status_on_transform_failure() {
        let result = SearchResult::success(200, Some(1_u8));
        let failed: SearchResult<u8> = result.and_then_content(|_| {
            Err(SearchOutcome::MalformedSupplierList("expected a list".to_string()))
        });

        assert_eq!(failed.status_code, 200);
        assert!(failed.content.is_none());
        assert!(matches!(failed.message, SearchOutcome::MalformedSupplierList(_)));
    }

    #[test]
    fn and_then_content_skips_failed_results() {
        let result: SearchResult<u8> = SearchResult::internal(SearchOutcome::RequestTimeout);
        let mapped: SearchResult<u16> = result.and_then_content(|_| Ok(7));

        assert_eq!(mapped.message, SearchOutcome::RequestTimeout);
        assert!(mapped.content.is_none());
    }
}
