//! Order-date parsing and canonical formatting.
//!
//! Inputs arrive in a handful of known textual encodings. Each encoding has
//! a cheap shape check that must pass before chrono parsing is attempted;
//! formats are tried in a fixed priority order and the first whose shape
//! matches wins, so a token is never parsed against an encoding it merely
//! resembles. Anything that matches no known shape and no format is a
//! rejection, handled by the caller.

use chrono::NaiveDate;

/// Canonical output encoding: ISO year-month-day.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an order date, trying known encodings in priority order.
///
/// Priority: ISO `2024-01-15`, then day/month/year `15/01/2024`, then
/// day-monthabbrev-year `15-Jan-2024`, then the two-digit-year variant
/// `15-Jan-24`. Returns `None` for blank input or any token that matches no
/// known shape.
pub fn parse_order_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if has_iso_shape(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok();
    }
    if has_slash_dmy_shape(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%d/%m/%Y").ok();
    }
    if let Some(year_len) = dash_month_abbrev_year_len(trimmed) {
        let format = if year_len == 4 { "%d-%b-%Y" } else { "%d-%b-%y" };
        return NaiveDate::parse_from_str(trimmed, format).ok();
    }

    None
}

/// Format a date in the canonical encoding.
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// `YYYY-MM-DD`: ten chars, digits split by hyphens at positions 4 and 7.
fn has_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

/// `D/M/YYYY`: three slash-separated numeric parts, four-digit year.
fn has_slash_dmy_shape(value: &str) -> bool {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() != 3 {
        return false;
    }
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(parts[0])
        && parts[0].len() <= 2
        && digits(parts[1])
        && parts[1].len() <= 2
        && digits(parts[2])
        && parts[2].len() == 4
}

/// `D-Mon-YYYY` or `D-Mon-YY`: numeric day, alphabetic month abbreviation,
/// numeric year of 2 or 4 digits. Returns the year length when matched.
fn dash_month_abbrev_year_len(value: &str) -> Option<usize> {
    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let day_ok = !parts[0].is_empty()
        && parts[0].len() <= 2
        && parts[0].bytes().all(|b| b.is_ascii_digit());
    let month_ok = !parts[1].is_empty() && parts[1].bytes().all(|b| b.is_ascii_alphabetic());
    let year_ok = (parts[2].len() == 2 || parts[2].len() == 4)
        && parts[2].bytes().all(|b| b.is_ascii_digit());
    if day_ok && month_ok && year_ok {
        Some(parts[2].len())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        insta::assert_snapshot!(
            parse_order_date("2024-01-15").unwrap().to_string(),
            @"2024-01-15"
        );
    }

    #[test]
    fn parses_slash_day_month_year() {
        // Day first: 16/01 is the 16th of January, never the 1st of month 16.
        insta::assert_snapshot!(
            parse_order_date("16/01/2024").unwrap().to_string(),
            @"2024-01-16"
        );
        insta::assert_snapshot!(
            parse_order_date("5/3/2024").unwrap().to_string(),
            @"2024-03-05"
        );
    }

    #[test]
    fn parses_month_abbreviation_with_four_digit_year() {
        insta::assert_snapshot!(
            parse_order_date("15-Jan-2024").unwrap().to_string(),
            @"2024-01-15"
        );
        insta::assert_snapshot!(
            parse_order_date("3-mar-2023").unwrap().to_string(),
            @"2023-03-03"
        );
    }

    #[test]
    fn parses_month_abbreviation_with_two_digit_year() {
        insta::assert_snapshot!(
            parse_order_date("15-Jan-24").unwrap().to_string(),
            @"2024-01-15"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(parse_order_date("  2024-01-15  ").is_some());
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert_eq!(parse_order_date(""), None);
        assert_eq!(parse_order_date("   "), None);
        assert_eq!(parse_order_date("not a date"), None);
        assert_eq!(parse_order_date("2024/01/15"), None);
        assert_eq!(parse_order_date("01-15-2024"), None);
    }

    #[test]
    fn rejects_shape_matches_that_are_not_calendar_dates() {
        // Shape matches ISO but the calendar disagrees.
        assert_eq!(parse_order_date("2024-13-45"), None);
        assert_eq!(parse_order_date("31/02/2024"), None);
        assert_eq!(parse_order_date("15-Xyz-2024"), None);
    }

    #[test]
    fn canonical_format_is_year_month_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(canonical_date(date), "2024-03-05");
    }
}
