//! Money arithmetic using rust_decimal
//!
//! Prices are stored as `f64`; sums go through `Decimal` and are rounded to
//! 2 decimal places (half-up) before converting back.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum of prices; non-finite or negative prices count as zero
pub fn order_total(prices: impl IntoIterator<Item = f64>) -> f64 {
    let sum: Decimal = prices
        .into_iter()
        .filter(|p| p.is_finite() && *p > 0.0)
        .map(to_decimal)
        .sum();
    to_f64(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_avoids_float_drift() {
        assert_eq!(order_total([0.1, 0.2]), 0.3);
        assert_eq!(order_total([1.25, 2.5, 0.01]), 3.76);
    }

    #[test]
    fn test_total_ignores_invalid_prices() {
        assert_eq!(order_total([f64::NAN, -5.0, 250_000.0]), 250_000.0);
        assert_eq!(order_total(Vec::new()), 0.0);
    }
}
