//! Shared runtime pieces for the Fragnet search client.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `runtime`: token lifecycle (auth) and the clock abstraction (time)
//! - `test-utils`: scripted mocks for downstream tests

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod auth;
#[cfg(feature = "runtime")]
pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(all(feature = "runtime", any(feature = "test-utils", test)))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use auth::{
    Credentials, OAuthClient, OAuthConfig, TokenEndpoint, TokenEndpointError, TokenManager,
    TokenManagerError, TokenSet,
};
#[cfg(feature = "runtime")]
pub use time::{Clock, MockClock, SystemClock};
