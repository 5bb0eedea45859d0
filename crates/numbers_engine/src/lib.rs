//! # numbers_engine: Deterministic Numbers generation
//!
//! ## Layer 2 Role
//!
//! Builds on `numbers_core` to turn a content item's seed into a displayed
//! Number:
//!
//! 1. [`rng`]: Mulberry32 seeded stream producing uniform draws in [0, 1)
//! 2. [`draws`]: The four named draws taken once per seed
//! 3. [`schedule`]: Negative-odds schedule over the 51 hour window
//! 4. [`pipeline`]: Fraction, exponent and sign stages plus formatting
//! 5. [`context`]: Anchor, clock, schedule and formatter held together
//! 6. [`card`]: Per-item memo of draws with on-demand display seconds
//!
//! ## Usage Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use numbers_core::format::NumberFormat;
//! use numbers_core::traits::FixedClock;
//! use numbers_core::types::Anchor;
//! use numbers_engine::card::NumberCard;
//! use numbers_engine::context::NumbersContext;
//!
//! let anchor = Anchor::for_year(2024).unwrap();
//! let clock = FixedClock::new(anchor.instant() + Duration::seconds(50_000));
//! let ctx = NumbersContext::with_anchor(clock, anchor, NumberFormat::default());
//!
//! let card = NumberCard::new(&ctx, 2, None);
//! assert_eq!(card.display(&ctx), "36,713");
//! ```

pub mod card;
pub mod context;
pub mod draws;
pub mod pipeline;
pub mod rng;
pub mod schedule;

pub use card::NumberCard;
pub use context::NumbersContext;
pub use draws::Draws;
pub use pipeline::NumberOutcome;
pub use schedule::NegativeOddsSchedule;
