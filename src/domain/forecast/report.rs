//! PredictionReport - everything shown for one submission.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::comparison::ExpectedDateComparison;
use super::next_period::NextPeriodForecast;
use super::notice::{messages, Notice};

/// How processing of a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// A forecast is shown.
    Predicted,
    /// Blocking input error (last period date in the future).
    Rejected,
    /// Post-menopausal cycle; no prediction applies.
    Skipped,
    /// Estimate outside the normal range; no forecast shown.
    OutOfRange,
    /// The model could not produce an estimate.
    Failed,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportStatus::Predicted => "predicted",
            ReportStatus::Rejected => "rejected",
            ReportStatus::Skipped => "skipped",
            ReportStatus::OutOfRange => "out_of_range",
            ReportStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// The ordered notices and optional results for one submission.
///
/// Only [`ReportStatus::Predicted`] reports carry a forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub status: ReportStatus,
    pub notices: Vec<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<NextPeriodForecast>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ExpectedDateComparison>,
}

impl PredictionReport {
    /// Blocking error before prediction.
    pub fn rejected(notice: Notice) -> Self {
        Self::without_forecast(ReportStatus::Rejected, vec![notice])
    }

    /// Prediction deliberately skipped.
    pub fn skipped(notice: Notice) -> Self {
        Self::without_forecast(ReportStatus::Skipped, vec![notice])
    }

    /// Estimate failed the plausibility checks.
    pub fn out_of_range(notices: Vec<Notice>) -> Self {
        Self::without_forecast(ReportStatus::OutOfRange, notices)
    }

    /// The model call failed; the cause is not shown to the user.
    pub fn failed() -> Self {
        Self::without_forecast(
            ReportStatus::Failed,
            vec![Notice::error(messages::PREDICTION_FAILED)],
        )
    }

    /// Successful prediction.
    ///
    /// Notices are ordered: plausibility notices, forecast range and point
    /// estimate, then any comparison notices.
    pub fn predicted(
        plausibility_notices: Vec<Notice>,
        forecast: NextPeriodForecast,
        comparison: Option<ExpectedDateComparison>,
    ) -> Self {
        let mut notices = plausibility_notices;
        notices.extend(forecast.notices());
        if let Some(comparison) = &comparison {
            notices.extend(comparison.notices());
        }

        Self {
            status: ReportStatus::Predicted,
            notices,
            forecast: Some(forecast),
            comparison,
        }
    }

    fn without_forecast(status: ReportStatus, notices: Vec<Notice>) -> Self {
        Self {
            status,
            notices,
            forecast: None,
            comparison: None,
        }
    }
}
