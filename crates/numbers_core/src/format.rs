//! Locale-aware number formatting.
//!
//! Formats a real number with at most N fractional digits ("maximum fraction
//! digits" semantics: trailing fractional zeros are dropped, never padded)
//! and groups integer digits in threes per locale convention.
//!
//! # Rounding
//!
//! Rounding to N digits uses the standard library's decimal conversion,
//! which is correctly rounded from the exact binary value of the `f64` and
//! breaks exact ties towards the even digit (`2.5` → `"2"`, `0.125` at two
//! digits → `"0.12"`).
//!
//! # Examples
//!
//! ```
//! use numbers_core::format::{Locale, NumberFormat};
//!
//! let en = NumberFormat::new(Locale::EnUs);
//! assert_eq!(en.format(-1234.5, 0), "-1,234");
//! assert_eq!(en.format(1234.5678, 2), "1,234.57");
//! assert_eq!(en.format(1234.5, 3), "1,234.5");
//!
//! let de = NumberFormat::new(Locale::DeDe);
//! assert_eq!(de.format(1234.5678, 2), "1.234,57");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::types::error::FormatError;

/// Supported digit grouping and decimal separator conventions.
///
/// # Examples
///
/// ```
/// use numbers_core::format::Locale;
///
/// let locale: Locale = "de-DE".parse().unwrap();
/// assert_eq!(locale, Locale::DeDe);
/// assert_eq!(locale.tag(), "de-DE");
/// assert_eq!(locale.decimal_separator(), ',');
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// English (United States): `1,234.5`
    #[default]
    EnUs,

    /// English (United Kingdom): `1,234.5`
    EnGb,

    /// German (Germany): `1.234,5`
    DeDe,

    /// French (France): `1 234,5` with a narrow no-break space
    FrFr,

    /// German (Switzerland): `1’234.5`
    DeCh,

    /// No grouping, `.` decimal separator: `1234.5`
    Plain,
}

impl Locale {
    /// Returns the BCP 47 style tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::DeCh => "de-CH",
            Locale::Plain => "plain",
        }
    }

    /// Returns the separator placed between groups of three integer digits,
    /// if the locale groups at all.
    pub fn grouping_separator(&self) -> Option<char> {
        match self {
            Locale::EnUs | Locale::EnGb => Some(','),
            Locale::DeDe => Some('.'),
            Locale::FrFr => Some('\u{202F}'),
            Locale::DeCh => Some('\u{2019}'),
            Locale::Plain => None,
        }
    }

    /// Returns the separator between integer and fractional digits.
    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::DeCh | Locale::Plain => '.',
            Locale::DeDe | Locale::FrFr => ',',
        }
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    /// Parses a locale tag, case-insensitively, accepting `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de" | "de-de" => Ok(Locale::DeDe),
            "fr" | "fr-fr" => Ok(Locale::FrFr),
            "ch" | "de-ch" => Ok(Locale::DeCh),
            "plain" | "c" | "posix" => Ok(Locale::Plain),
            _ => Err(FormatError::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Formatter producing display text for numbers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberFormat {
    locale: Locale,
}

impl NumberFormat {
    /// Creates a formatter for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Returns the locale this formatter uses.
    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats `value` with at most `max_fraction_digits` fractional digits.
    ///
    /// Never fails: a value that rounds to zero prints as `"0"` (no negative
    /// zero), and non-finite values degrade to `"NaN"`, `"∞"` or `"-∞"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numbers_core::format::NumberFormat;
    ///
    /// let format = NumberFormat::default();
    /// assert_eq!(format.format(-0.0, 0), "0");
    /// assert_eq!(format.format(-0.004, 2), "0");
    /// assert_eq!(format.format(1077.9845, 1), "1,078");
    /// assert_eq!(format.format(f64::INFINITY, 0), "∞");
    /// ```
    pub fn format(&self, value: f64, max_fraction_digits: u8) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let rounded = format!("{:.*}", usize::from(max_fraction_digits), value.abs());
        let (integer, fraction) = match rounded.split_once('.') {
            Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
            None => (rounded.as_str(), ""),
        };
        let is_zero = fraction.is_empty() && integer.bytes().all(|b| b == b'0');

        let mut out = String::with_capacity(rounded.len() + rounded.len() / 3 + 1);
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        self.push_grouped(&mut out, integer);
        if !fraction.is_empty() {
            out.push(self.locale.decimal_separator());
            out.push_str(fraction);
        }
        out
    }

    fn push_grouped(&self, out: &mut String, digits: &str) {
        let Some(separator) = self.locale.grouping_separator() else {
            out.push_str(digits);
            return;
        };

        let len = digits.len();
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(digit);
        }
    }
}
