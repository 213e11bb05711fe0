//! Fragnet search API client
//!
//! # Architecture
//!
//! - Uses the shared `HttpClient` (no direct reqwest client construction)
//! - Lazy token refresh through `AccessTokenProvider`
//! - Every search returns a `SearchResult`; only explicit authentication and
//!   ping return errors
//! - Fixed timeout on every request, no retry

pub mod auth;
pub mod client;
pub mod service;

pub use auth::{create_oauth_config, create_token_manager};
pub use client::SearchClient;
pub use service::FragnetSearch;
