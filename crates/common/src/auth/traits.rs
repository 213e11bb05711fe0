//! Token endpoint abstraction
//!
//! Lets the token manager run against the real HTTP endpoint or a scripted
//! mock.

use async_trait::async_trait;

use super::client::TokenEndpointError;
use super::types::{TokenGrant, TokenResponse};

/// Issues token pairs in exchange for grants
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Present `grant` and return the parsed token response
    ///
    /// # Errors
    /// Returns an error if the endpoint refuses the grant, cannot be reached,
    /// or answers with an unusable body.
    async fn request_token(&self, grant: &TokenGrant)
        -> Result<TokenResponse, TokenEndpointError>;
}
