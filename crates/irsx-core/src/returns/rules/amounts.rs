//! Monetary amount and count coercion.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse an exact decimal amount (e.g. "1,234,567.89").
///
/// Thousands separators and surrounding whitespace are removed. Scientific
/// notation is accepted. Anything else that is not a plain decimal is absent.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let cleaned = text.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
}

/// Parse a head count, truncating fractional forms such as "12.0".
pub fn parse_integer_count(text: &str) -> Option<i64> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}
