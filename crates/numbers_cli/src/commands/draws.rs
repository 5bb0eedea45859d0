//! Draws command implementation
//!
//! Prints the four memoised draws for a seed.

use numbers_engine::pipeline::{decimal_places, growth_exponent};
use numbers_engine::Draws;
use tracing::info;

use crate::Result;

/// Run the draws command
pub fn run(seed: u32) -> Result<()> {
    info!(seed, "Computing draws");
    for line in describe(seed) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per draw, in consumption order, plus the derived choices.
pub fn describe(seed: u32) -> Vec<String> {
    let draws = Draws::from_seed(seed);
    let exponent = growth_exponent(draws.exponent_roll)
        .map_or_else(|| "none".to_string(), |e| format!("{:.6}", e));

    vec![
        format!("seed            {}", seed),
        format!("magnitude_roll  {}", draws.magnitude_roll),
        format!("sign_roll       {}", draws.sign_roll),
        format!("fraction_roll   {}", draws.fraction_roll),
        format!("exponent_roll   {}", draws.exponent_roll),
        format!("decimal_places  {}", decimal_places(draws.fraction_roll)),
        format!("exponent        {}", exponent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_seed_zero() {
        let lines = describe(0);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "magnitude_roll  0.26642920868471265");
        assert_eq!(lines[2], "sign_roll       0.0003297457005828619");
        assert_eq!(lines[5], "decimal_places  0");
    }

    #[test]
    fn test_describe_without_exponent() {
        // seed 2: exponent_roll ≈ 0.538
        assert_eq!(describe(2)[6], "exponent        none");
    }
}
