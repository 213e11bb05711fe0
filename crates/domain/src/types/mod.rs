//! Domain types and models

pub mod catalog;
pub mod search;

pub use catalog::CalculationInfo;
pub use search::{Calculation, ExpansionQuery, NeighbourhoodQuery, SearchOutcome, SearchResult};
