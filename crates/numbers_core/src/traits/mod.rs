//! Core traits.
//!
//! - [`clock`]: Source of "now" for every time-dependent computation

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
