//! Conversions from external infrastructure errors into domain errors.

use fragnet_domain::FragnetError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub FragnetError);

impl From<InfraError> for FragnetError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<FragnetError> for InfraError {
    fn from(value: FragnetError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → FragnetError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        if value.is_timeout() {
            return InfraError(FragnetError::Timeout(value.to_string()));
        }

        if value.is_connect() {
            return InfraError(FragnetError::Network(format!("HTTP connection failure: {value}")));
        }

        if value.is_builder() {
            return InfraError(FragnetError::InvalidInput(format!("invalid HTTP request: {value}")));
        }

        InfraError(FragnetError::Network(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
