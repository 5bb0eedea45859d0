//! Number transform pipeline.
//!
//! Turns the four draws, the display seconds and the current negative odds
//! into a Number. The stages run in a fixed order:
//!
//! 1. Magnitude: `value = magnitude_roll * display_seconds`
//! 2. Fraction: inside the [`FRACTION_THRESHOLD`] band, pick 1 to
//!    [`MAX_DECIMAL_PLACES`] fractional digits
//! 3. Exponent: inside the [`EXPONENT_THRESHOLD`] band, raise the value to a
//!    power in `[1, MAX_EXPONENT]`
//! 4. Sign: negate when `sign_roll <= negative_odds`
//! 5. Format with at most the chosen number of fractional digits
//!
//! The exponent stage runs before the sign stage so the base of the power is
//! never negative. Every function here is pure.

use numbers_core::format::NumberFormat;
use numbers_core::math::interpolation::lerp;

use crate::draws::Draws;

/// Upper edge of the fraction band (2% of draws show fractional digits).
pub const FRACTION_THRESHOLD: f64 = 0.02;

/// Most fractional digits a Number can show.
pub const MAX_DECIMAL_PLACES: u8 = 5;

/// Upper edge of the exponent band (a coin flip).
pub const EXPONENT_THRESHOLD: f64 = 0.5;

/// Largest growth exponent.
pub const MAX_EXPONENT: f64 = 1.42;

/// Result of running the pipeline, before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberOutcome {
    /// Final signed value.
    pub value: f64,
    /// Maximum fractional digits used when formatting, in [0, 5].
    pub decimal_places: u8,
    /// Growth exponent, when the exponent stage applied.
    pub exponent: Option<f64>,
    /// Whether the sign stage negated the value.
    pub negated: bool,
}

impl NumberOutcome {
    /// Formats the value with at most `decimal_places` fractional digits.
    pub fn render(&self, format: &NumberFormat) -> String {
        format.format(self.value, self.decimal_places)
    }
}

/// Fractional digits selected by `fraction_roll`.
///
/// Zero outside the fraction band. Inside it the roll is renormalised to
/// [0, 1) and spread over 1..=5; the interpolation runs to one past the
/// maximum because the result is floored.
///
/// # Examples
/// ```
/// use numbers_engine::pipeline::decimal_places;
///
/// assert_eq!(decimal_places(0.5), 0);
/// assert_eq!(decimal_places(0.0), 1);
/// assert_eq!(decimal_places(0.0199), 5);
/// ```
pub fn decimal_places(fraction_roll: f64) -> u8 {
    if fraction_roll > FRACTION_THRESHOLD {
        return 0;
    }

    let normalised = fraction_roll / FRACTION_THRESHOLD;
    let places = lerp(1.0, f64::from(MAX_DECIMAL_PLACES + 1), normalised).floor();
    (places as u8).min(MAX_DECIMAL_PLACES)
}

/// Growth exponent selected by `exponent_roll`, if any.
///
/// # Examples
/// ```
/// use numbers_engine::pipeline::growth_exponent;
///
/// assert_eq!(growth_exponent(0.75), None);
/// assert_eq!(growth_exponent(0.0), Some(1.0));
/// assert_eq!(growth_exponent(0.5), Some(1.42));
/// ```
pub fn growth_exponent(exponent_roll: f64) -> Option<f64> {
    if exponent_roll > EXPONENT_THRESHOLD {
        return None;
    }

    Some(lerp(1.0, MAX_EXPONENT, exponent_roll / EXPONENT_THRESHOLD))
}

/// Runs the magnitude, fraction, exponent and sign stages.
///
/// # Examples
/// ```
/// use numbers_engine::draws::Draws;
/// use numbers_engine::pipeline::transform;
///
/// let draws = Draws::from_seed(2);
/// let outcome = transform(&draws, 100_000.0, 0.05);
/// assert_eq!(outcome.decimal_places, 0);
/// assert_eq!(outcome.exponent, None);
/// assert!(!outcome.negated);
/// assert_eq!(outcome.value, draws.magnitude_roll * 100_000.0);
/// ```
pub fn transform(draws: &Draws, display_seconds: f64, negative_odds: f64) -> NumberOutcome {
    let mut value = draws.magnitude_roll * display_seconds;

    let decimal_places = decimal_places(draws.fraction_roll);

    let exponent = growth_exponent(draws.exponent_roll);
    if let Some(exponent) = exponent {
        value = value.powf(exponent);
    }

    let negated = draws.sign_roll <= negative_odds;
    if negated {
        value = -value;
    }

    NumberOutcome {
        value,
        decimal_places,
        exponent,
        negated,
    }
}

/// Runs every stage including formatting.
pub fn render_number(
    draws: &Draws,
    display_seconds: f64,
    negative_odds: f64,
    format: &NumberFormat,
) -> String {
    transform(draws, display_seconds, negative_odds).render(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn draws(magnitude: f64, sign: f64, fraction: f64, exponent: f64) -> Draws {
        Draws {
            magnitude_roll: magnitude,
            sign_roll: sign,
            fraction_roll: fraction,
            exponent_roll: exponent,
        }
    }

    #[test]
    fn test_decimal_places_band_edges() {
        assert_eq!(decimal_places(FRACTION_THRESHOLD), 5);
        assert_eq!(decimal_places(0.020_000_001), 0);
        assert_eq!(decimal_places(0.99), 0);
    }

    #[test]
    fn test_decimal_places_spread() {
        assert_eq!(decimal_places(0.001), 1);
        assert_eq!(decimal_places(0.005), 2);
        assert_eq!(decimal_places(0.009), 3);
        assert_eq!(decimal_places(0.013), 4);
        assert_eq!(decimal_places(0.017), 5);
    }

    #[test]
    fn test_growth_exponent_band() {
        assert_eq!(growth_exponent(0.500_000_1), None);
        assert_relative_eq!(growth_exponent(0.25).unwrap(), 1.21, epsilon = 1e-12);
    }

    #[test]
    fn test_magnitude_only() {
        let outcome = transform(&draws(0.5, 0.9, 0.5, 0.9), 1000.0, 0.6);
        assert_eq!(outcome.value, 500.0);
        assert_eq!(outcome.decimal_places, 0);
        assert_eq!(outcome.exponent, None);
        assert!(!outcome.negated);
    }

    #[test]
    fn test_exponent_applied_before_sign() {
        let outcome = transform(&draws(0.5, 0.0, 0.5, 0.5), 200.0, 0.05);
        assert_relative_eq!(outcome.value, -(100.0_f64.powf(1.42)), epsilon = 1e-9);
        assert!(outcome.negated);
        assert!(!outcome.value.is_nan());
    }

    #[test]
    fn test_sign_flip_at_equal_odds() {
        let outcome = transform(&draws(0.5, 0.3, 0.5, 0.9), 10.0, 0.3);
        assert!(outcome.negated);
        assert_eq!(outcome.value, -5.0);
    }

    #[test]
    fn test_zero_display_seconds_formats_as_zero() {
        let format = NumberFormat::default();
        let d = draws(0.7, 0.0, 0.001, 0.1);

        let outcome = transform(&d, 0.0, 0.6);
        assert!(outcome.negated);
        assert_eq!(outcome.value, 0.0);
        assert_eq!(outcome.render(&format), "0");
    }

    #[test]
    fn test_render_number_matches_outcome_render() {
        let format = NumberFormat::default();
        let d = draws(0.123, 0.4, 0.01, 0.2);
        assert_eq!(
            render_number(&d, 5000.0, 0.5, &format),
            transform(&d, 5000.0, 0.5).render(&format)
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_draws() -> impl Strategy<Value = Draws> {
            (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0)
                .prop_map(|(m, s, f, e)| draws(m, s, f, e))
        }

        proptest! {
            #[test]
            fn prop_decimal_places_in_range(roll in 0.0f64..1.0) {
                let places = decimal_places(roll);
                prop_assert!(places <= MAX_DECIMAL_PLACES);
                if roll > FRACTION_THRESHOLD {
                    prop_assert_eq!(places, 0);
                } else {
                    prop_assert!(places >= 1);
                }
            }

            #[test]
            fn prop_exponent_iff_in_band(roll in 0.0f64..1.0) {
                match growth_exponent(roll) {
                    Some(exponent) => {
                        prop_assert!(roll <= EXPONENT_THRESHOLD);
                        prop_assert!((1.0..=MAX_EXPONENT).contains(&exponent));
                    }
                    None => prop_assert!(roll > EXPONENT_THRESHOLD),
                }
            }

            #[test]
            fn prop_sign_flip_iff_roll_within_odds(
                d in any_draws(),
                seconds in 0.0f64..1e6,
                odds in 0.05f64..=0.6,
            ) {
                let outcome = transform(&d, seconds, odds);
                prop_assert_eq!(outcome.negated, d.sign_roll <= odds);
            }

            #[test]
            fn prop_idempotent(d in any_draws(), seconds in 0.0f64..1e6, odds in 0.05f64..=0.6) {
                let format = NumberFormat::default();
                prop_assert_eq!(
                    render_number(&d, seconds, odds, &format),
                    render_number(&d, seconds, odds, &format)
                );
            }

            #[test]
            fn prop_magnitude_monotone_in_seconds(
                d in any_draws(),
                a in 0.0f64..1e7,
                b in 0.0f64..1e7,
                odds in 0.05f64..=0.6,
            ) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let smaller = transform(&d, lo, odds).value.abs();
                let larger = transform(&d, hi, odds).value.abs();
                prop_assert!(smaller <= larger);
            }

            #[test]
            fn prop_zero_seconds_always_renders_zero(d in any_draws(), odds in 0.05f64..=0.6) {
                let format = NumberFormat::default();
                prop_assert_eq!(render_number(&d, 0.0, odds, &format), "0");
            }
        }
    }
}
