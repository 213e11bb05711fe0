//! Token endpoint HTTP client
//!
//! Posts form-encoded password and refresh grants to an OpenID Connect token
//! endpoint and parses the JSON token response.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, instrument};

use super::traits::TokenEndpoint;
use super::types::{OAuthConfig, TokenGrant, TokenResponse};

/// Error type for token endpoint requests
#[derive(Debug, Error)]
pub enum TokenEndpointError {
    /// Endpoint answered with something other than 200
    #[error("token endpoint returned HTTP {0}")]
    Status(u16),

    /// No answer within the request timeout
    #[error("token request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection or protocol failure
    #[error("token request failed: {0}")]
    Network(String),

    /// 200 response without a usable token body
    #[error("malformed token response: {0}")]
    MalformedResponse(String),

    /// HTTP client could not be built
    #[error("token client configuration error: {0}")]
    Config(String),
}

/// OAuth token endpoint client
#[derive(Debug, Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    client: Client,
}

impl OAuthClient {
    /// Create a client for the configured token endpoint
    ///
    /// # Errors
    /// Returns `Config` if the underlying HTTP client cannot be built.
    pub fn new(config: OAuthConfig) -> Result<Self, TokenEndpointError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .no_proxy()
            .build()
            .map_err(|e| TokenEndpointError::Config(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Present a grant to the token endpoint
    ///
    /// Only HTTP 200 counts as success. The body must carry `access_token`,
    /// `expires_in` and `refresh_token`.
    ///
    /// # Errors
    /// Returns `Status` for any non-200 answer, `Timeout` or `Network` when
    /// the request fails in transit, and `MalformedResponse` for an unusable
    /// body.
    #[instrument(skip(self, grant), fields(grant = grant.kind()))]
    pub async fn request_token(
        &self,
        grant: &TokenGrant,
    ) -> Result<TokenResponse, TokenEndpointError> {
        let params = grant.form_params(&self.config.client_id);

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "token endpoint rejected grant");
            return Err(TokenEndpointError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.map_transport_error(&e))?;
        TokenResponse::from_slice(&body)
    }

    /// Get a reference to the endpoint configuration
    #[must_use]
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> TokenEndpointError {
        if err.is_timeout() {
            TokenEndpointError::Timeout(self.config.request_timeout)
        } else {
            TokenEndpointError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl TokenEndpoint for OAuthClient {
    async fn request_token(
        &self,
        grant: &TokenGrant,
    ) -> Result<TokenResponse, TokenEndpointError> {
        self.request_token(grant).await
    }
}
