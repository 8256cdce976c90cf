//! Display formatting for monetary values and percentages.
//!
//! The engine never rounds; these helpers apply rounding at the last moment
//! before display. Monetary values render with exactly two decimal places,
//! derived ratios with one, and benchmark percentages as whole integers.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoint away from zero).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use funnel_core::format::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary amount as `$1234.56`.
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_half_up(value))
}

/// Formats a derived ratio as `12.3%` (one decimal place).
pub fn format_ratio(value: Decimal) -> String {
    format!(
        "{:.1}%",
        value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    )
}
