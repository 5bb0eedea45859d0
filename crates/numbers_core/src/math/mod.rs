//! Mathematical helpers.
//!
//! - [`interpolation`]: Clamped linear interpolation used by the odds
//!   schedule and the transform pipeline

pub mod interpolation;
