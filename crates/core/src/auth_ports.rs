//! Port interface for access token supply
//!
//! The search client only needs "a token good enough to send right now";
//! how it is obtained and kept fresh is behind this trait.

use async_trait::async_trait;
use fragnet_common::auth::{TokenEndpoint, TokenManager};
use fragnet_common::time::Clock;
use fragnet_domain::{FragnetError, Result};

/// Trait for providing access tokens
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get an access token valid for the next request
    ///
    /// Implementations refresh or re-authenticate as needed.
    async fn access_token(&self) -> Result<String>;
}

#[async_trait]
impl<E, C> AccessTokenProvider for TokenManager<E, C>
where
    E: TokenEndpoint,
    C: Clock,
{
    async fn access_token(&self) -> Result<String> {
        self.ensure_valid_token().await.map_err(|e| FragnetError::Auth(e.to_string()))
    }
}
