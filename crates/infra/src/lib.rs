//! # Fragnet Infrastructure
//!
//! Network and configuration implementations of core ports.
//!
//! This crate contains:
//! - The search REST client and the high-level [`FragnetSearch`] facade
//! - Token manager wiring over the OAuth token endpoint
//! - HTTP client plumbing and transport error mapping
//! - Configuration loading from environment variables or files
//!
//! ## Architecture
//! - Implements traits defined in `fragnet-core`
//! - Depends on `fragnet-common`, `fragnet-domain` and `fragnet-core`
//! - Contains all "impure" code (network and file I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{create_oauth_config, create_token_manager, FragnetSearch, SearchClient};
pub use config::{load, load_from_env, load_from_file, probe_config_paths};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
