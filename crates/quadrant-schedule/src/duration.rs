//! Phase duration parsing
//!
//! Phase durations arrive as free text ("4 weeks", "2 months", "six weeks").
//! Parsing is total: unparseable input falls back to defaults instead of
//! failing, and the result is always at least one month.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Weeks assumed when a week-based duration has no usable number
const DEFAULT_WEEKS: u32 = 2;

/// Parse a free-text phase duration into whole months
///
/// - contains "week": leading integer (default 2), `ceil(weeks / 4)`
/// - contains "month": leading integer (default 1)
/// - anything else, including empty input: 1
///
/// Always returns a value ≥ 1.
#[must_use]
pub fn parse_duration(text: &str) -> u32 {
    let lower = text.to_ascii_lowercase();

    let months = if lower.contains("week") {
        let weeks = leading_int(&lower).unwrap_or(DEFAULT_WEEKS);
        weeks.div_ceil(4)
    } else if lower.contains("month") {
        leading_int(&lower).unwrap_or(1)
    } else {
        1
    };

    months.max(1)
}

/// First integer appearing in the text, if any
fn leading_int(text: &str) -> Option<u32> {
    LEADING_INT
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_round_up_to_months() {
        assert_eq!(parse_duration("4 weeks"), 1);
        assert_eq!(parse_duration("5 weeks"), 2);
        assert_eq!(parse_duration("8 weeks"), 2);
        assert_eq!(parse_duration("10 weeks"), 3);
    }

    #[test]
    fn single_week_still_counts_as_a_month() {
        assert_eq!(parse_duration("1 week"), 1);
    }

    #[test]
    fn months_parse_directly() {
        assert_eq!(parse_duration("1 month"), 1);
        assert_eq!(parse_duration("2 months"), 2);
        assert_eq!(parse_duration("12 months"), 12);
    }

    #[test]
    fn wordy_durations_use_defaults() {
        // No digits: week-based input assumes 2 weeks, month-based assumes 1.
        assert_eq!(parse_duration("a few weeks"), 1);
        assert_eq!(parse_duration("several months"), 1);
    }

    #[test]
    fn unrecognized_input_defaults_to_one_month() {
        assert_eq!(parse_duration(""), 1);
        assert_eq!(parse_duration("Q3"), 1);
        assert_eq!(parse_duration("ongoing"), 1);
    }

    #[test]
    fn zero_clamps_to_one() {
        assert_eq!(parse_duration("0 weeks"), 1);
        assert_eq!(parse_duration("0 months"), 1);
    }

    #[test]
    fn case_insensitive_units() {
        assert_eq!(parse_duration("6 WEEKS"), 2);
        assert_eq!(parse_duration("3 Months"), 3);
    }
}
