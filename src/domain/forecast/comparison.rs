//! Comparison of the prediction with the user's own expected date.

use serde::Serialize;

use crate::domain::foundation::CalendarDate;

use super::notice::{messages, Notice};

/// Largest error, in days, that still counts as agreeing with the prediction.
pub const AFFIRMATION_THRESHOLD_DAYS: i64 = 4;

/// Result of comparing the expected-date text with the predicted date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectedDateComparison {
    /// The text parsed as a date.
    Compared {
        expected_date: CalendarDate,
        error_days: i64,
        aligned: bool,
    },
    /// The text was not `DD-MM-YYYY`; only the comparison is skipped.
    Unparseable { input: String },
}

impl ExpectedDateComparison {
    /// Compares `expected_text` (`DD-MM-YYYY`) against `predicted_date`.
    pub fn evaluate(predicted_date: CalendarDate, expected_text: &str) -> Self {
        match CalendarDate::parse_display("expected_date", expected_text) {
            Ok(expected_date) => {
                let error_days = predicted_date.days_since(&expected_date).abs();
                ExpectedDateComparison::Compared {
                    expected_date,
                    error_days,
                    aligned: error_days <= AFFIRMATION_THRESHOLD_DAYS,
                }
            }
            Err(_) => ExpectedDateComparison::Unparseable {
                input: expected_text.to_string(),
            },
        }
    }

    pub fn is_aligned(&self) -> bool {
        matches!(self, ExpectedDateComparison::Compared { aligned: true, .. })
    }

    /// Notices to append after the main prediction.
    pub fn notices(&self) -> Vec<Notice> {
        match self {
            ExpectedDateComparison::Compared {
                expected_date,
                error_days,
                aligned,
            } => {
                let mut notices = vec![
                    Notice::text(format!("Your Expected Date: {}", expected_date)),
                    Notice::text(format!("Point Estimate Error: {} day(s)", error_days)),
                ];
                if *aligned {
                    notices.push(Notice::success(messages::EXPECTED_DATE_ALIGNED));
                }
                notices
            }
            ExpectedDateComparison::Unparseable { .. } => {
                vec![Notice::warning(messages::EXPECTED_DATE_FORMAT)]
            }
        }
    }
}
