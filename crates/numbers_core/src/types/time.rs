//! Time types for the promotional window.
//!
//! This module provides:
//! - `Anchor`: The start (00:00:00 UTC) of April 1, where the window opens
//! - `elapsed_seconds`: Absolute distance between two instants in seconds
//! - `parse_publish_instant`: Lenient ISO 8601 parsing of publish timestamps
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use numbers_core::types::time::{Anchor, WINDOW_SECONDS};
//!
//! let anchor = Anchor::for_year(2024).unwrap();
//! assert_eq!(anchor.instant(), Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
//!
//! // Window closes 51 hours later
//! let end = anchor.window_end();
//! assert_eq!((end - anchor.instant()).num_seconds() as f64, WINDOW_SECONDS);
//! ```

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;

/// Length of the promotional window: 48 hours plus the 3 hour spread between
/// the first and last time zone, in seconds.
pub const WINDOW_SECONDS: f64 = ((48 + 3) * 60 * 60) as f64;

const ANCHOR_MONTH: u32 = 4;
const ANCHOR_DAY: u32 = 1;

/// Fixed calendar instant marking the start of the promotional window.
///
/// The anchor is computed once and held by whoever needs it; it is never
/// refreshed behind the holder's back, so a long-running session keeps the
/// anchor it started with.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use numbers_core::types::time::Anchor;
///
/// let now = Utc.with_ymd_and_hms(2025, 11, 30, 17, 45, 0).unwrap();
/// let anchor = Anchor::containing(now).unwrap();
/// assert_eq!(anchor.instant(), Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Anchor(DateTime<Utc>);

impl Anchor {
    /// Creates the anchor for April 1 of the given year.
    ///
    /// # Returns
    /// `Ok(Anchor)` for any year chrono can represent,
    /// `Err(DateError::InvalidDate)` otherwise.
    pub fn for_year(year: i32) -> Result<Self, DateError> {
        Utc.with_ymd_and_hms(year, ANCHOR_MONTH, ANCHOR_DAY, 0, 0, 0)
            .single()
            .map(Anchor)
            .ok_or(DateError::InvalidDate {
                year,
                month: ANCHOR_MONTH,
                day: ANCHOR_DAY,
            })
    }

    /// Creates the anchor for the UTC calendar year containing `now`.
    pub fn containing(now: DateTime<Utc>) -> Result<Self, DateError> {
        Self::for_year(now.year())
    }

    /// Pins the anchor to an arbitrary instant.
    ///
    /// Used when configuration overrides the calendar-derived anchor.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Anchor(instant)
    }

    /// Returns the anchor instant.
    #[inline]
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the instant at which the promotional window closes.
    pub fn window_end(&self) -> DateTime<Utc> {
        self.0 + Duration::seconds(WINDOW_SECONDS as i64)
    }

    /// Returns the reference instant for a content item.
    ///
    /// Items published after the anchor start counting from their own
    /// publish instant so that their numbers start small; everything else,
    /// including items with no publish instant, counts from the anchor.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Duration;
    /// use numbers_core::types::time::Anchor;
    ///
    /// let anchor = Anchor::for_year(2024).unwrap();
    /// let early = anchor.instant() - Duration::days(3);
    /// let late = anchor.instant() + Duration::hours(5);
    ///
    /// assert_eq!(anchor.effective_date(None), anchor.instant());
    /// assert_eq!(anchor.effective_date(Some(early)), anchor.instant());
    /// assert_eq!(anchor.effective_date(Some(late)), late);
    /// ```
    pub fn effective_date(&self, published_at: Option<DateTime<Utc>>) -> DateTime<Utc> {
        match published_at {
            Some(instant) if instant > self.0 => instant,
            _ => self.0,
        }
    }
}

impl FromStr for Anchor {
    type Err = DateError;

    /// Parses a pinned anchor using the same rules as publish timestamps.
    fn from_str(s: &str) -> Result<Self, DateError> {
        parse_publish_instant(s).map(Anchor)
    }
}

impl fmt::Display for Anchor {
    /// Formats the anchor as RFC 3339.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Absolute number of seconds between `now` and `instant`.
///
/// Millisecond resolution; always non-negative regardless of which instant
/// comes first.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use numbers_core::types::time::elapsed_seconds;
///
/// let now = Utc::now();
/// assert_eq!(elapsed_seconds(now, now - Duration::milliseconds(1500)), 1.5);
/// assert_eq!(elapsed_seconds(now, now + Duration::milliseconds(1500)), 1.5);
/// ```
pub fn elapsed_seconds(now: DateTime<Utc>, instant: DateTime<Utc>) -> f64 {
    let millis = now.signed_duration_since(instant).num_milliseconds();
    (millis as f64 / 1000.0).abs()
}

/// Parses a publish timestamp into a UTC instant.
///
/// Accepted shapes, tried in order:
/// - RFC 3339 with offset: `2024-04-01T12:30:00Z`, `2024-04-01T12:30:00.250+02:00`
/// - Naive date-time, read as UTC: `2024-04-01T12:30:00`
/// - Bare date, read as UTC midnight: `2024-04-01`
///
/// # Returns
/// `Ok(DateTime<Utc>)` if any shape matches, `Err(DateError::ParseError)` otherwise.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use numbers_core::types::time::parse_publish_instant;
///
/// let parsed = parse_publish_instant("2024-04-01T14:00:00+02:00").unwrap();
/// assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap());
///
/// assert!(parse_publish_instant("yesterday-ish").is_err());
/// ```
pub fn parse_publish_instant(raw: &str) -> Result<DateTime<Utc>, DateError> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(DateError::ParseError(format!(
        "unrecognised timestamp '{}'",
        raw
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_window_is_fifty_one_hours() {
        assert_eq!(WINDOW_SECONDS, 183_600.0);
    }

    #[test]
    fn test_anchor_for_year() {
        let anchor = Anchor::for_year(2024).unwrap();
        assert_eq!(anchor.instant(), utc(2024, 4, 1, 0, 0, 0));
    }

    #[test]
    fn test_anchor_containing_late_in_month() {
        // The 31st has no April counterpart; the anchor must still be April 1
        let now = utc(2023, 3, 31, 23, 59, 59);
        let anchor = Anchor::containing(now).unwrap();
        assert_eq!(anchor.instant(), utc(2023, 4, 1, 0, 0, 0));
    }

    #[test]
    fn test_anchor_containing_before_april() {
        let now = utc(2026, 1, 2, 8, 0, 0);
        let anchor = Anchor::containing(now).unwrap();
        assert_eq!(anchor.instant(), utc(2026, 4, 1, 0, 0, 0));
    }

    #[test]
    fn test_window_end() {
        let anchor = Anchor::for_year(2024).unwrap();
        assert_eq!(anchor.window_end(), utc(2024, 4, 3, 3, 0, 0));
    }

    #[test]
    fn test_effective_date_equal_to_anchor_uses_anchor() {
        let anchor = Anchor::for_year(2024).unwrap();
        assert_eq!(
            anchor.effective_date(Some(anchor.instant())),
            anchor.instant()
        );
    }

    #[test]
    fn test_effective_date_after_anchor_uses_publish() {
        let anchor = Anchor::for_year(2024).unwrap();
        let published = utc(2024, 4, 1, 0, 0, 1);
        assert_eq!(anchor.effective_date(Some(published)), published);
    }

    #[test]
    fn test_elapsed_seconds_is_absolute() {
        let a = utc(2024, 4, 1, 0, 0, 0);
        let b = utc(2024, 4, 1, 1, 0, 0);
        assert_eq!(elapsed_seconds(a, b), 3600.0);
        assert_eq!(elapsed_seconds(b, a), 3600.0);
        assert_eq!(elapsed_seconds(a, a), 0.0);
    }

    #[test]
    fn test_elapsed_seconds_millisecond_resolution() {
        let a = utc(2024, 4, 1, 0, 0, 0);
        let b = a + Duration::milliseconds(250);
        assert_relative_eq!(elapsed_seconds(b, a), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_rfc3339_utc() {
        let parsed = parse_publish_instant("2024-04-02T10:15:30Z").unwrap();
        assert_eq!(parsed, utc(2024, 4, 2, 10, 15, 30));
    }

    #[test]
    fn test_parse_rfc3339_offset_normalised() {
        let parsed = parse_publish_instant("2024-04-01T20:00:00-04:00").unwrap();
        assert_eq!(parsed, utc(2024, 4, 2, 0, 0, 0));
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let parsed = parse_publish_instant("2024-04-01T06:00:00").unwrap();
        assert_eq!(parsed, utc(2024, 4, 1, 6, 0, 0));

        let fractional = parse_publish_instant("2024-04-01T06:00:00.500").unwrap();
        assert_eq!(fractional, utc(2024, 4, 1, 6, 0, 0) + Duration::milliseconds(500));
    }

    #[test]
    fn test_parse_bare_date() {
        let parsed = parse_publish_instant(" 2024-04-02 ").unwrap();
        assert_eq!(parsed, utc(2024, 4, 2, 0, 0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_publish_instant("not a date"),
            Err(DateError::ParseError(_))
        ));
        assert!(parse_publish_instant("").is_err());
        assert!(parse_publish_instant("2024-02-30").is_err());
    }

    #[test]
    fn test_anchor_from_str_and_display() {
        let anchor: Anchor = "2024-04-01T00:00:00Z".parse().unwrap();
        assert_eq!(anchor, Anchor::for_year(2024).unwrap());
        assert_eq!(format!("{}", anchor), "2024-04-01T00:00:00+00:00");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_elapsed_non_negative_and_symmetric(
                offset_ms in -10_000_000_000i64..10_000_000_000i64
            ) {
                let base = utc(2024, 4, 1, 0, 0, 0);
                let other = base + Duration::milliseconds(offset_ms);
                let forward = elapsed_seconds(base, other);
                let backward = elapsed_seconds(other, base);
                prop_assert!(forward >= 0.0);
                prop_assert_eq!(forward, backward);
            }

            #[test]
            fn prop_effective_date_never_before_anchor(
                offset_s in -1_000_000i64..1_000_000i64
            ) {
                let anchor = Anchor::for_year(2024).unwrap();
                let published = anchor.instant() + Duration::seconds(offset_s);
                prop_assert!(anchor.effective_date(Some(published)) >= anchor.instant());
            }
        }
    }
}
