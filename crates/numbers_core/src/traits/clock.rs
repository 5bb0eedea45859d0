//! Wall-clock abstraction.
//!
//! Every time-dependent quantity (negative odds, display seconds) reads "now"
//! through a [`Clock`] so the reading point is explicit and tests can pin it.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

/// Source of the current instant.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use numbers_core::traits::clock::{Clock, FixedClock};
///
/// let pinned = Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();
/// let clock = FixedClock::new(pinned);
/// assert_eq!(clock.now(), pinned);
/// ```
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that reports a pinned instant until told otherwise.
///
/// Interior mutability lets a test advance time while the clock is borrowed
/// by a context. The type is `!Sync`.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock pinned at `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Cell::new(instant),
        }
    }

    /// Moves the pinned instant to `instant`.
    pub fn set(&self, instant: DateTime<Utc>) {
        self.instant.set(instant);
    }

    /// Moves the pinned instant forward by `delta` (backwards if negative).
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use numbers_core::traits::clock::{Clock, FixedClock};
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    /// let clock = FixedClock::new(start);
    /// clock.advance(Duration::minutes(90));
    /// assert_eq!(clock.now(), start + Duration::minutes(90));
    /// ```
    pub fn advance(&self, delta: Duration) {
        self.instant.set(self.instant.get() + delta);
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.instant.get()
    }
}
