//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Fragnet client operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FragnetError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Fragnet operations
pub type Result<T> = std::result::Result<T, FragnetError>;

/// Reason a search request was rejected before reaching the network.
///
/// The display form is the reason code reported in a result message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("EmptySmiles")]
    EmptySmiles,

    #[error("InvalidHAC")]
    InvalidHac(i64),

    #[error("InvalidRAC")]
    InvalidRac(i64),

    #[error("InvalidHops ({0})")]
    InvalidHops(i64),

    #[error("InvalidLimit ({0})")]
    InvalidLimit(i64),

    #[error("InvalidCalculation: {0}")]
    InvalidCalculation(String),
}
