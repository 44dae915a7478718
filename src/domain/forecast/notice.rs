//! Display notices produced while answering a submission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the display surface should render a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Blocking error; nothing further is shown.
    Error,
    /// Warning; may or may not stop processing.
    Warning,
    /// Informational note.
    Info,
    /// Positive outcome.
    Success,
    /// Plain text line.
    Text,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoticeLevel::Error => "error",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Text => "text",
        };
        write!(f, "{}", s)
    }
}

/// A single message for the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn text(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Text, message)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Fixed user-facing message texts.
pub mod messages {
    pub const FUTURE_LAST_PERIOD: &str = "Last period date cannot be in the future.";

    pub const POST_MENOPAUSAL_SKIP: &str = "Prediction skipped: cycle marked as post-menopausal.";

    pub const VERIFY_MENOPAUSAL_STATUS: &str =
        "User age suggests post-menopause. Please verify cycle status.";

    pub const OUTSIDE_NORMAL_RANGE: &str =
        "Prediction outside normal range. Please consult a doctor.";

    pub const WIDENED_RANGE: &str =
        "Due to PCOS and/or high stress levels, your cycle is likely to vary more. \
         Hence, the prediction range has been widened to reflect that uncertainty.";

    pub const EXPECTED_DATE_FORMAT: &str = "Please enter expected date in DD-MM-YYYY format.";

    pub const EXPECTED_DATE_ALIGNED: &str = "Your expected date closely aligns with our prediction! \
         That's a great sign of a stable cycle.";

    pub const PREDICTION_FAILED: &str = "Something went wrong while generating your prediction.";

    pub const DISCLAIMER: &str = "This tool is for informational purposes only and does not \
         replace medical advice. If you have concerns about your cycle, consult a gynecologist.";

    pub const PRIVACY: &str =
        "Your data is never stored. Each prediction is computed for a single request and discarded.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_level() {
        assert_eq!(Notice::error("x").level, NoticeLevel::Error);
        assert_eq!(Notice::warning("x").level, NoticeLevel::Warning);
        assert_eq!(Notice::info("x").level, NoticeLevel::Info);
        assert_eq!(Notice::success("x").level, NoticeLevel::Success);
        assert_eq!(Notice::text("x").level, NoticeLevel::Text);
    }

    #[test]
    fn notice_displays_level_and_message() {
        let notice = Notice::warning(messages::OUTSIDE_NORMAL_RANGE);
        assert_eq!(
            notice.to_string(),
            "[warning] Prediction outside normal range. Please consult a doctor."
        );
    }

    #[test]
    fn level_serializes_snake_case() {
        let json = serde_json::to_string(&Notice::success("done")).unwrap();
        assert_eq!(json, r#"{"level":"success","message":"done"}"#);
    }
}
