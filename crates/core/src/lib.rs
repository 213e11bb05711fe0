//! # Fragnet Core
//!
//! Pure search logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Search request validation
//! - Endpoint URL and query construction
//! - Response content transforms
//! - Port interfaces (traits) for the search client
//!
//! ## Architecture Principles
//! - No HTTP calls made here
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth_ports;
pub mod search;

pub use auth_ports::AccessTokenProvider;
pub use search::catalog::{calculation_list, supplier_names};
pub use search::endpoints::{expansion_params, neighbourhood_params, Endpoints};
pub use search::validation::{validate_expansion, validate_neighbourhood, validate_smiles};
