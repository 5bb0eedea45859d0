//! # Seeded Draw Stream
//!
//! This module provides the deterministic pseudo-random stream behind every
//! Number. A content item's seed fully determines the sequence of draws.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: The same seed yields the same draws bit-for-bit,
//!   in any conforming implementation
//! - **Fixed algorithm**: Mulberry32 with 32-bit wrapping arithmetic; no
//!   pluggable backends, no reseeding, no state serialisation
//! - **Encapsulation**: The 32-bit accumulator is private; the only
//!   operation is advancing the stream
//!
//! ## Module Structure
//!
//! - [`mulberry`]: The Mulberry32 generator
//!
//! ## Usage Example
//!
//! ```rust
//! use numbers_engine::rng::Mulberry32;
//!
//! let mut rng = Mulberry32::new(0);
//! assert_eq!(rng.next_draw(), 0.26642920868471265);
//! ```

mod mulberry;

// Public re-exports
pub use mulberry::Mulberry32;
