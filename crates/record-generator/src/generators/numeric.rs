//! Monetary value generators.

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

/// Lowest generated wage.
pub const WAGE_MIN: f64 = 50.0;

/// Highest generated wage.
pub const WAGE_MAX: f64 = 7000.0;

/// Fractional digits in a rendered amount.
pub const MONEY_SCALE: u32 = 2;

/// Convert a float to a decimal amount with exactly two fractional digits.
///
/// Rounds the exact binary value half-to-even, so `0.125` becomes `0.12`.
pub fn to_money(value: f64) -> Decimal {
    let mut amount = Decimal::from_f64_retain(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
    amount.rescale(MONEY_SCALE);
    amount
}

/// Generate a random amount in the given range, rendered like `1234.50`.
pub fn generate_money_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> String {
    to_money(rng.gen_range(min..=max)).to_string()
}

/// Generate a wage between 50.00 and 7000.00.
pub fn generate_wage<R: Rng + ?Sized>(rng: &mut R) -> String {
    generate_money_range(rng, WAGE_MIN, WAGE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::str::FromStr;

    #[test]
    fn test_to_money_scale() {
        assert_eq!(to_money(100.5).to_string(), "100.50");
        assert_eq!(to_money(50.0).to_string(), "50.00");
        assert_eq!(to_money(6999.999).to_string(), "7000.00");
    }

    #[test]
    fn test_to_money_rounds_half_even() {
        // 0.125 and 0.375 are exact in binary
        assert_eq!(to_money(0.125).to_string(), "0.12");
        assert_eq!(to_money(0.375).to_string(), "0.38");
    }

    #[test]
    fn test_generate_wage() {
        let mut rng = StdRng::seed_from_u64(42);
        let min = Decimal::from_str("50.00").unwrap();
        let max = Decimal::from_str("7000.00").unwrap();

        for _ in 0..1000 {
            let wage = generate_wage(&mut rng);

            let (_, fraction) = wage.split_once('.').expect("wage has a decimal point");
            assert_eq!(fraction.len(), 2, "bad wage {wage}");

            let parsed = Decimal::from_str(&wage).unwrap();
            assert!(parsed >= min && parsed <= max, "wage {wage} out of range");
        }
    }
}
