/// Utilities for date formatting
///
/// Subscription dates render the way the Indian English locale shows a
/// medium-length date, e.g. "15 Mar 2024".
use chrono::NaiveDate;

/// Placeholder shown when a subscription date is absent or invalid.
pub const DATE_PLACEHOLDER: &str = "Not yet decided";

/// Format a date in medium en-IN style ("15 Mar 2024").
/// Absent dates render the placeholder instead of failing.
pub fn format_medium_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%-d %b %Y").to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_valid_date() {
        assert_eq!(
            format_medium_date(NaiveDate::from_ymd_opt(2024, 3, 15)),
            "15 Mar 2024"
        );
        assert_eq!(
            format_medium_date(NaiveDate::from_ymd_opt(2025, 12, 31)),
            "31 Dec 2025"
        );
    }

    #[test]
    fn single_digit_day_is_not_padded() {
        assert_eq!(
            format_medium_date(NaiveDate::from_ymd_opt(2024, 3, 5)),
            "5 Mar 2024"
        );
    }

    #[test]
    fn missing_date_renders_placeholder() {
        assert_eq!(format_medium_date(None), "Not yet decided");
    }
}
