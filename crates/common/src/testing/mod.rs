//! Testing utilities and helpers
//!
//! - **[`mocks`]**: Scripted token endpoint
//!
//! The mock clock lives in [`crate::time`] and is re-exported here.
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use fragnet_common::auth::{Credentials, TokenManager, TokenResponse};
//! use fragnet_common::testing::{MockClock, MockTokenEndpoint};
//!
//! # tokio_test::block_on(async {
//! let endpoint = MockTokenEndpoint::new();
//! endpoint.respond_with(TokenResponse::new("A1", 300, "R1", None));
//!
//! let clock = MockClock::new();
//! let manager = TokenManager::with_clock(
//!     endpoint.clone(),
//!     Credentials::new("user", "password"),
//!     Duration::from_secs(45),
//!     clock.clone(),
//! );
//!
//! assert_eq!(manager.ensure_valid_token().await.unwrap(), "A1");
//! assert_eq!(endpoint.password_grants(), 1);
//! # });
//! ```

pub mod mocks;

pub use mocks::MockTokenEndpoint;

pub use crate::time::{Clock, MockClock, SystemClock};
