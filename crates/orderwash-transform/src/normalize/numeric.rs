//! Numeric field handling: lenient parsing and sign correction.

/// Parse a quantity or price cell, tolerating thousands separators and a
/// leading currency marker. Returns `None` for blank or unparseable input.
pub fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ',' | '$'))
        .collect();
    let parsed = cleaned.trim().parse::<f64>().ok()?;
    if parsed.is_finite() { Some(parsed) } else { None }
}

/// Sign-corrected amount, or `None` when the value is a gap to impute.
///
/// Negative values are treated as sign data-entry errors and replaced with
/// their absolute value; this discards the return-vs-sale distinction and
/// is a recorded business assumption, not a derived fact. Zero and
/// unparseable values are gaps.
pub fn amount_or_gap(value: Option<&str>) -> Option<f64> {
    let parsed = parse_amount(value?)?;
    let corrected = parsed.abs();
    if corrected == 0.0 { None } else { Some(corrected) }
}
