//! The four named draws behind a Number.

use crate::rng::Mulberry32;

/// The four uniform draws taken once per seed, in stream order.
///
/// The field order is the consumption order: the first draw scales the
/// magnitude, the second decides the sign, the third the fractional digits
/// and the fourth the exponential growth. Reordering them changes every
/// Number and is never done.
///
/// # Examples
///
/// ```
/// use numbers_engine::draws::Draws;
///
/// let draws = Draws::from_seed(0);
/// assert_eq!(draws.magnitude_roll, 0.26642920868471265);
/// assert_eq!(draws.sign_roll, 0.0003297457005828619);
/// assert_eq!(draws.fraction_roll, 0.2232720274478197);
/// assert_eq!(draws.exponent_roll, 0.1462021479383111);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Draws {
    /// Fraction of the display seconds that becomes the base value.
    pub magnitude_roll: f64,
    /// Compared against the negative odds to decide the sign.
    pub sign_roll: f64,
    /// Selects fractional digits when inside the fraction band.
    pub fraction_roll: f64,
    /// Selects the growth exponent when inside the exponent band.
    pub exponent_roll: f64,
}

impl Draws {
    /// Takes the four draws from a fresh stream seeded with `seed`.
    pub fn from_seed(seed: u32) -> Self {
        Self::take(&mut Mulberry32::new(seed))
    }

    /// Takes the next four draws from `rng`.
    pub fn take(rng: &mut Mulberry32) -> Self {
        let magnitude_roll = rng.next_draw();
        let sign_roll = rng.next_draw();
        let fraction_roll = rng.next_draw();
        let exponent_roll = rng.next_draw();
        Self {
            magnitude_roll,
            sign_roll,
            fraction_roll,
            exponent_roll,
        }
    }

    /// Returns the draws as an array in consumption order.
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.magnitude_roll,
            self.sign_roll,
            self.fraction_roll,
            self.exponent_roll,
        ]
    }
}
