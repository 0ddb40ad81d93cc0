//! Numeric predicates: price range and attribute thresholds

use rust_decimal::Decimal;

use super::PriceRange;

/// Inclusive price range test. No range means no constraint.
pub(super) fn matches_price(price: Decimal, range: Option<&PriceRange>) -> bool {
    match range {
        Some(range) => range.contains(price),
        None => true,
    }
}

/// Minimum-value test against a named numeric attribute.
///
/// A missing attribute fails the threshold (fail-closed), as does a NaN
/// value smuggled in by upstream data: `NaN >= min` is false.
pub(super) fn meets_threshold(value: Option<f64>, min: f64) -> bool {
    match value {
        Some(value) => value >= min,
        None => false,
    }
}
