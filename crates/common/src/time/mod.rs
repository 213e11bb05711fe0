//! Time abstractions
//!
//! - **[`clock`]**: Real and mock wall clocks, so expiry decisions can be
//!   tested without waiting

pub mod clock;

pub use clock::{Clock, MockClock, SystemClock};
