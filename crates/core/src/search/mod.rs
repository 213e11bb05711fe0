//! Search request rules
//!
//! - **[`validation`]**: parameter checks run before any network call
//! - **[`endpoints`]**: REST URLs and query parameters
//! - **[`catalog`]**: transforms for the supplier and calculation listings

pub mod catalog;
pub mod endpoints;
pub mod validation;
