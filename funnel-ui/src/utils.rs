use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a spending amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}'")]
pub struct ParseAmountError {
    input: String,
}

/// Normalizes input for decimal parsing: trims whitespace and removes
/// commas (thousands separator) and a leading dollar sign.
fn normalize_amount_input(s: &str) -> String {
    s.trim().trim_start_matches('$').replace(',', "")
}

/// Parses a user-entered spending amount into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and an optional
/// `$` prefix. Empty or whitespace-only input is treated as 0, matching the
/// spending form's "blank means no spend" behavior. Negative amounts are
/// rejected.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = normalized.parse().map_err(|_| ParseAmountError {
        input: s.to_string(),
    })?;
    if value < Decimal::ZERO {
        return Err(ParseAmountError {
            input: s.to_string(),
        });
    }
    Ok(value)
}

/// Validator for required free-text prompts.
pub fn require_non_blank(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("this field is required")
    } else {
        Ok(())
    }
}

/// Fixed-width bar visualising a percentage, 20 cells wide.
pub fn percentage_bar(pct: u32) -> String {
    let filled = (pct.min(100) / 5) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}
