//! # numbers_core: Foundation for the Numbers generator
//!
//! ## Layer 1 (Foundation) Role
//!
//! numbers_core is the bottom layer of the workspace, providing:
//! - Interpolation helpers: `clamp`, `lerp` (`math::interpolation`)
//! - Time types: `Anchor`, elapsed-second arithmetic, publish timestamp
//!   parsing (`types::time`)
//! - Locale-aware number formatting: `NumberFormat`, `Locale` (`format`)
//! - A `Clock` seam so "now" can be pinned in tests (`traits::clock`)
//! - Error types: `DateError`, `FormatError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other numbers_* crates, with minimal
//! external dependencies:
//! - num-traits: Generic floating-point interpolation
//! - chrono: Calendar instants and durations
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use numbers_core::format::{Locale, NumberFormat};
//! use numbers_core::math::interpolation::lerp;
//! use numbers_core::types::time::{elapsed_seconds, Anchor};
//!
//! let anchor = Anchor::for_year(2024).unwrap();
//! let now = anchor.instant() + chrono::Duration::hours(2);
//! assert_eq!(elapsed_seconds(now, anchor.instant()), 7200.0);
//!
//! assert_eq!(lerp(0.05, 0.6, 0.0), 0.05);
//!
//! let format = NumberFormat::new(Locale::EnUs);
//! assert_eq!(format.format(1234567.891, 2), "1,234,567.89");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Anchor` and `Locale`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod format;
pub mod math;
pub mod traits;
pub mod types;
