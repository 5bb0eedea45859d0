//! Negative-odds schedule.
//!
//! The probability that a Number is shown negative rises linearly from
//! [`START_ODDS`] at the anchor to [`END_ODDS`] once the window has elapsed,
//! then stays there. It is read against the real time since the anchor, not
//! an item's effective date, so every item sees the same odds at the same
//! moment.

use chrono::{DateTime, Utc};
use numbers_core::math::interpolation::{clamp, lerp};
use numbers_core::traits::Clock;
use numbers_core::types::{elapsed_seconds, Anchor, WINDOW_SECONDS};

/// Sign-flip probability at the anchor.
pub const START_ODDS: f64 = 0.05;

/// Sign-flip probability from the end of the window onwards.
pub const END_ODDS: f64 = 0.6;

/// Linear odds schedule over the promotional window.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use numbers_core::types::Anchor;
/// use numbers_engine::schedule::NegativeOddsSchedule;
///
/// let anchor = Anchor::for_year(2024).unwrap();
/// let schedule = NegativeOddsSchedule::new(anchor);
///
/// assert_eq!(schedule.odds_at(anchor.instant()), 0.05);
/// assert_eq!(schedule.odds_at(anchor.window_end()), 0.6);
/// assert_eq!(schedule.odds_at(anchor.window_end() + Duration::days(30)), 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeOddsSchedule {
    anchor: Anchor,
}

impl NegativeOddsSchedule {
    /// Creates the schedule for the window opening at `anchor`.
    pub fn new(anchor: Anchor) -> Self {
        Self { anchor }
    }

    /// Returns the anchor the schedule is measured from.
    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Fraction of the window elapsed at `now`, clamped to [0, 1].
    ///
    /// Distance is absolute, so instants before the anchor count the same
    /// as instants after it.
    pub fn progress_at(&self, now: DateTime<Utc>) -> f64 {
        clamp(
            elapsed_seconds(now, self.anchor.instant()) / WINDOW_SECONDS,
            0.0,
            1.0,
        )
    }

    /// Sign-flip probability at `now`, always in [`START_ODDS`, `END_ODDS`].
    pub fn odds_at(&self, now: DateTime<Utc>) -> f64 {
        lerp(
            START_ODDS,
            END_ODDS,
            elapsed_seconds(now, self.anchor.instant()) / WINDOW_SECONDS,
        )
    }

    /// Sign-flip probability read from `clock` at call time.
    pub fn current_odds<C: Clock>(&self, clock: &C) -> f64 {
        self.odds_at(clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;
    use numbers_core::traits::FixedClock;

    fn schedule() -> NegativeOddsSchedule {
        NegativeOddsSchedule::new(Anchor::for_year(2024).unwrap())
    }

    #[test]
    fn test_odds_at_anchor() {
        let s = schedule();
        assert_eq!(s.odds_at(s.anchor().instant()), START_ODDS);
        assert_eq!(s.progress_at(s.anchor().instant()), 0.0);
    }

    #[test]
    fn test_odds_halfway() {
        let s = schedule();
        let halfway = s.anchor().instant() + Duration::seconds(91_800);
        assert_relative_eq!(s.progress_at(halfway), 0.5, epsilon = 1e-12);
        assert_relative_eq!(s.odds_at(halfway), 0.325, epsilon = 1e-12);
    }

    #[test]
    fn test_odds_saturate_after_window() {
        let s = schedule();
        let later = s.anchor().window_end() + Duration::hours(1);
        assert_eq!(s.odds_at(later), END_ODDS);
        assert_eq!(s.progress_at(later), 1.0);
    }

    #[test]
    fn test_odds_before_anchor_use_absolute_distance() {
        let s = schedule();
        let before = s.anchor().instant() - Duration::seconds(91_800);
        let after = s.anchor().instant() + Duration::seconds(91_800);
        assert_eq!(s.odds_at(before), s.odds_at(after));
    }

    #[test]
    fn test_current_odds_reads_clock() {
        let s = schedule();
        let clock = FixedClock::new(s.anchor().instant());
        assert_eq!(s.current_odds(&clock), START_ODDS);

        clock.advance(Duration::hours(51));
        assert_eq!(s.current_odds(&clock), END_ODDS);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_odds_bounded(offset_s in 0i64..10_000_000) {
                let s = schedule();
                let odds = s.odds_at(s.anchor().instant() + Duration::seconds(offset_s));
                prop_assert!((START_ODDS..=END_ODDS).contains(&odds));
            }

            #[test]
            fn prop_odds_non_decreasing(a in 0i64..400_000, b in 0i64..400_000) {
                let s = schedule();
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let earlier = s.odds_at(s.anchor().instant() + Duration::seconds(lo));
                let later = s.odds_at(s.anchor().instant() + Duration::seconds(hi));
                prop_assert!(earlier <= later);
            }
        }
    }
}
