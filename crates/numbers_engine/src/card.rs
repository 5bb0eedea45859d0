//! Per-item Number state.
//!
//! A [`NumberCard`] keeps two independently refreshed values for one content
//! item:
//!
//! - the draws, taken once from the item's seed and kept for the card's
//!   lifetime;
//! - the display seconds, sampled from the clock at construction and again
//!   on every [`NumberCard::refresh`].
//!
//! Refreshing never touches the seeded stream.

use chrono::{DateTime, Utc};
use numbers_core::traits::Clock;
use numbers_core::types::parse_publish_instant;
use tracing::{debug, warn};

use crate::context::NumbersContext;
use crate::draws::Draws;
use crate::pipeline::{transform, NumberOutcome};

/// Number state for one content item.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use numbers_core::format::NumberFormat;
/// use numbers_core::traits::FixedClock;
/// use numbers_core::types::Anchor;
/// use numbers_engine::card::NumberCard;
/// use numbers_engine::context::NumbersContext;
///
/// let anchor = Anchor::for_year(2024).unwrap();
/// let ctx = NumbersContext::with_anchor(
///     FixedClock::new(anchor.instant() + Duration::seconds(10_000)),
///     anchor,
///     NumberFormat::default(),
/// );
///
/// let mut card = NumberCard::new(&ctx, 118, None);
/// assert_eq!(card.display(&ctx), "617.3");
///
/// // A later refresh grows the magnitude; the draws are unchanged.
/// let draws = *card.draws();
/// ctx.clock().advance(Duration::seconds(10_000));
/// card.refresh(&ctx);
/// assert_eq!(card.display(&ctx), "1,234.7");
/// assert_eq!(*card.draws(), draws);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberCard {
    seed: u32,
    draws: Draws,
    effective_date: DateTime<Utc>,
    display_seconds: f64,
}

impl NumberCard {
    /// Creates the card for `seed`, taking its draws and a first
    /// display-seconds sample.
    pub fn new<C: Clock>(
        ctx: &NumbersContext<C>,
        seed: u32,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        let draws = Draws::from_seed(seed);
        let effective_date = ctx.effective_date(published_at);
        let display_seconds = ctx.display_seconds(effective_date);

        debug!(
            seed,
            magnitude_roll = draws.magnitude_roll,
            sign_roll = draws.sign_roll,
            fraction_roll = draws.fraction_roll,
            exponent_roll = draws.exponent_roll,
            effective_date = %effective_date.to_rfc3339(),
            "Draws memoised"
        );

        Self {
            seed,
            draws,
            effective_date,
            display_seconds,
        }
    }

    /// Creates the card from a raw publish timestamp.
    ///
    /// A timestamp that does not parse is treated as absent, so the item
    /// counts from the anchor; the failure is logged and not returned.
    pub fn from_raw<C: Clock>(ctx: &NumbersContext<C>, seed: u32, published_at: Option<&str>) -> Self {
        let published_at = published_at.and_then(|raw| match parse_publish_instant(raw) {
            Ok(instant) => Some(instant),
            Err(err) => {
                warn!(seed, raw, error = %err, "Ignoring unparseable publish timestamp");
                None
            }
        });
        Self::new(ctx, seed, published_at)
    }

    /// Samples the display seconds again and returns the new value.
    pub fn refresh<C: Clock>(&mut self, ctx: &NumbersContext<C>) -> f64 {
        self.display_seconds = ctx.display_seconds(self.effective_date);
        debug!(seed = self.seed, display_seconds = self.display_seconds, "Display seconds refreshed");
        self.display_seconds
    }

    /// Runs the pipeline with the current negative odds.
    pub fn outcome<C: Clock>(&self, ctx: &NumbersContext<C>) -> NumberOutcome {
        transform(&self.draws, self.display_seconds, ctx.current_negative_odds())
    }

    /// Formatted Number, without any display suffix.
    pub fn display<C: Clock>(&self, ctx: &NumbersContext<C>) -> String {
        self.outcome(ctx).render(ctx.format())
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the memoised draws.
    #[inline]
    pub fn draws(&self) -> &Draws {
        &self.draws
    }

    /// Returns the reference instant the display seconds count from.
    #[inline]
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.effective_date
    }

    /// Returns the most recent display-seconds sample.
    #[inline]
    pub fn display_seconds(&self) -> f64 {
        self.display_seconds
    }
}
