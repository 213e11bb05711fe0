//! Token lifecycle for the Squonk identity server
//!
//! Obtains access tokens with the OAuth 2.0 password grant and keeps them
//! fresh with the refresh grant.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  TokenManager   │  Lazy refresh against a deadline
//! └────────┬────────┘
//!          │
//!          └──► TokenEndpoint      (trait)
//!                    │
//!                    ├──► OAuthClient        (reqwest, form POST)
//!                    └──► MockTokenEndpoint  (testing)
//! ```
//!
//! # Usage Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use fragnet_common::auth::{Credentials, OAuthClient, OAuthConfig, TokenManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OAuthConfig::new(
//!         "https://squonk.it/auth/realms/squonk/protocol/openid-connect/token".to_string(),
//!         "fragnet-search".to_string(),
//!         Duration::from_secs(20),
//!     );
//!     let client = OAuthClient::new(config)?;
//!
//!     let manager = TokenManager::new(
//!         client,
//!         Credentials::new("user", "password"),
//!         Duration::from_secs(45),
//!     );
//!
//!     manager.authenticate().await?;
//!     let access_token = manager.ensure_valid_token().await?;
//!     println!("Token has {:?} seconds left", manager.seconds_until_expiry().await);
//!     # let _ = access_token;
//!     Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - **[`types`]**: Grants, token response and token pair
//! - **[`traits`]**: `TokenEndpoint` abstraction
//! - **[`client`]**: HTTP token endpoint client
//! - **[`token_manager`]**: Token lifecycle with lazy refresh

pub mod client;
pub mod token_manager;
pub mod traits;
pub mod types;

pub use client::{OAuthClient, TokenEndpointError};
pub use token_manager::{plan, TokenAction, TokenManager, TokenManagerError};
pub use traits::TokenEndpoint;
pub use types::{Credentials, OAuthConfig, TokenGrant, TokenResponse, TokenSet};
