//! # Fragnet Domain
//!
//! Domain types for the Fragnet search client.
//!
//! This crate contains:
//! - Search request, result and catalogue types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Service constants
//!
//! ## Architecture
//! - No dependencies on other Fragnet crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
