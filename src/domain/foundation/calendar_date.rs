//! CalendarDate value object for whole-day dates.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Day-month-year layout used for every date shown to, or typed by, the user.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Placeholder shown next to free-text date inputs.
pub const DISPLAY_DATE_PLACEHOLDER: &str = "DD-MM-YYYY";

/// A calendar day without time or timezone.
///
/// Serializes as ISO `YYYY-MM-DD`; displays as `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month and day, rejecting impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Today's date in the server's local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses user-typed `DD-MM-YYYY` text.
    ///
    /// The year must be exactly four digits and no surrounding whitespace is
    /// allowed; chrono alone would read `29-01-24` as the year 24.
    pub fn parse_display(field: &str, input: &str) -> Result<Self, ValidationError> {
        let four_digit_year = input
            .rsplit_once('-')
            .is_some_and(|(_, year)| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()));
        if !four_digit_year {
            return Err(ValidationError::invalid_format(
                field,
                format!("expected {} with a four-digit year", DISPLAY_DATE_PLACEHOLDER),
            ));
        }

        NaiveDate::parse_from_str(input, DISPLAY_DATE_FORMAT)
            .map(Self)
            .map_err(|e| {
                ValidationError::invalid_format(
                    field,
                    format!("expected {}: {}", DISPLAY_DATE_PLACEHOLDER, e),
                )
            })
    }

    /// Returns the inner chrono date.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Creates a new date by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Checks if this date is after another.
    pub fn is_after(&self, other: &CalendarDate) -> bool {
        self.0 > other.0
    }

    /// Whole days from `other` to `self`; negative if `other` is later.
    pub fn days_since(&self, other: &CalendarDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// Formats the date as `DD-MM-YYYY`.
    pub fn to_display_string(&self) -> String {
        self.0.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn from_ymd_rejects_impossible_dates() {
        assert!(CalendarDate::from_ymd(2024, 2, 30).is_err());
        assert!(CalendarDate::from_ymd(2023, 13, 1).is_err());
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn displays_day_month_year() {
        assert_eq!(date(2024, 1, 29).to_string(), "29-01-2024");
        assert_eq!(date(2024, 2, 1).to_display_string(), "01-02-2024");
    }

    #[test]
    fn plus_days_crosses_month_and_year_boundaries() {
        assert_eq!(date(2024, 1, 1).plus_days(28), date(2024, 1, 29));
        assert_eq!(date(2024, 1, 29).plus_days(3), date(2024, 2, 1));
        assert_eq!(date(2024, 12, 30).plus_days(5), date(2025, 1, 4));
        assert_eq!(date(2024, 3, 1).plus_days(-1), date(2024, 2, 29));
    }

    #[test]
    fn days_since_is_signed() {
        assert_eq!(date(2024, 2, 2).days_since(&date(2024, 1, 29)), 4);
        assert_eq!(date(2024, 1, 29).days_since(&date(2024, 2, 2)), -4);
    }

    #[test]
    fn parse_display_accepts_day_month_year() {
        let parsed = CalendarDate::parse_display("expected", "02-02-2024").unwrap();
        assert_eq!(parsed, date(2024, 2, 2));
    }

    #[test]
    fn parse_display_requires_four_digit_year() {
        assert!(CalendarDate::parse_display("expected", "29-01-24").is_err());
        assert!(CalendarDate::parse_display("expected", "29-01-02024").is_err());
        assert!(CalendarDate::parse_display("expected", "29-01-+024").is_err());
    }

    #[test]
    fn parse_display_rejects_surrounding_whitespace() {
        assert!(CalendarDate::parse_display("expected", "  15-06-2024 ").is_err());
        assert!(CalendarDate::parse_display("expected", "15-06-2024\n").is_err());
    }

    #[test]
    fn parse_display_rejects_iso_text() {
        let err = CalendarDate::parse_display("expected", "2024-01-01").unwrap_err();
        assert_eq!(err.field(), "expected");
    }

    #[test]
    fn parse_display_rejects_garbage() {
        assert!(CalendarDate::parse_display("expected", "next tuesday").is_err());
        assert!(CalendarDate::parse_display("expected", "31-02-2024").is_err());
    }

    #[test]
    fn is_after_compares_days() {
        assert!(date(2024, 1, 2).is_after(&date(2024, 1, 1)));
        assert!(!date(2024, 1, 1).is_after(&date(2024, 1, 1)));
    }

    #[test]
    fn serializes_as_iso_date() {
        let json = serde_json::to_string(&date(2024, 1, 5)).unwrap();
        assert_eq!(json, "\"2024-01-05\"");

        let parsed: CalendarDate = serde_json::from_str("\"2024-01-05\"").unwrap();
        assert_eq!(parsed, date(2024, 1, 5));
    }
}
