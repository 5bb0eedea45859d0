//! Session context shared by every Number.
//!
//! [`NumbersContext`] holds the things that are fixed for a session: the
//! anchor (computed once, or pinned by configuration), the odds schedule
//! derived from it, the number formatter and the clock. It replaces any
//! process-wide global so tests can pin both the anchor and "now".

use chrono::{DateTime, Utc};
use numbers_core::format::NumberFormat;
use numbers_core::traits::{Clock, SystemClock};
use numbers_core::types::{elapsed_seconds, Anchor, DateError};
use tracing::debug;

use crate::schedule::NegativeOddsSchedule;

/// Anchor, schedule, formatter and clock for one session.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use numbers_core::format::NumberFormat;
/// use numbers_core::traits::FixedClock;
/// use numbers_engine::context::NumbersContext;
///
/// let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 4, 1, 6, 0, 0).unwrap());
/// let ctx = NumbersContext::new(clock, NumberFormat::default()).unwrap();
///
/// assert_eq!(ctx.anchor().instant(), Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
/// assert_eq!(ctx.display_seconds(ctx.anchor().instant()), 21_600.0);
/// ```
#[derive(Debug, Clone)]
pub struct NumbersContext<C: Clock = SystemClock> {
    anchor: Anchor,
    schedule: NegativeOddsSchedule,
    format: NumberFormat,
    clock: C,
}

impl NumbersContext<SystemClock> {
    /// Creates a context on the system clock with the anchor for the
    /// current UTC year.
    pub fn system(format: NumberFormat) -> Result<Self, DateError> {
        Self::new(SystemClock, format)
    }
}

impl<C: Clock> NumbersContext<C> {
    /// Creates a context whose anchor is April 1 of the year `clock` is in.
    ///
    /// The clock is read once here; the anchor does not move afterwards.
    pub fn new(clock: C, format: NumberFormat) -> Result<Self, DateError> {
        let anchor = Anchor::containing(clock.now())?;
        Ok(Self::with_anchor(clock, anchor, format))
    }

    /// Creates a context with an explicitly pinned anchor.
    pub fn with_anchor(clock: C, anchor: Anchor, format: NumberFormat) -> Self {
        debug!(anchor = %anchor, locale = %format.locale(), "Numbers context created");
        Self {
            anchor,
            schedule: NegativeOddsSchedule::new(anchor),
            format,
            clock,
        }
    }

    /// Returns the session anchor.
    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the odds schedule measured from the session anchor.
    #[inline]
    pub fn schedule(&self) -> &NegativeOddsSchedule {
        &self.schedule
    }

    /// Returns the number formatter.
    #[inline]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Returns the clock.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Reads the current instant.
    #[inline]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Reference instant for an item published at `published_at`.
    pub fn effective_date(&self, published_at: Option<DateTime<Utc>>) -> DateTime<Utc> {
        self.anchor.effective_date(published_at)
    }

    /// Sign-flip probability right now.
    pub fn current_negative_odds(&self) -> f64 {
        self.schedule.current_odds(&self.clock)
    }

    /// Fraction of the window elapsed right now, in [0, 1].
    pub fn window_progress(&self) -> f64 {
        self.schedule.progress_at(self.clock.now())
    }

    /// Seconds between now and `effective_date`, read from the clock.
    pub fn display_seconds(&self, effective_date: DateTime<Utc>) -> f64 {
        elapsed_seconds(self.clock.now(), effective_date)
    }
}
