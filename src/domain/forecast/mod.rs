//! Forecast Module - Pure domain services for next-period prediction.
//!
//! Everything here works on values already in hand: the validated profile,
//! today's date and the model's day estimate. The model itself lives behind
//! the `CyclePredictor` port.
//!
//! # Components
//!
//! - `screening` - Future-date rejection and the post-menopausal skip
//! - `uncertainty` - Ordered overwrite/merge rules for the date window
//! - `plausibility` - Notices and the out-of-range block for an estimate
//! - `next_period` - Predicted date and calendar range
//! - `comparison` - Agreement with the user's own expected date
//! - `report` - The ordered notices returned for a submission

mod comparison;
mod next_period;
mod notice;
mod plausibility;
mod report;
mod screening;
mod uncertainty;

pub use comparison::{ExpectedDateComparison, AFFIRMATION_THRESHOLD_DAYS};
pub use next_period::{round_days, NextPeriodForecast};
pub use notice::{messages, Notice, NoticeLevel};
pub use plausibility::{
    check_prediction, Plausibility, HIGH_STRESS_NOTE_LEVEL, MENOPAUSE_CHECK_AGE,
    NORMAL_PREDICTION_DAYS,
};
pub use report::{PredictionReport, ReportStatus};
pub use screening::{screen_submission, Screening};
pub use uncertainty::{
    estimate_window, fold_rules, matching_rules, UncertaintyWindow, WindowEffect, WindowInputs,
    WindowRule, BASE_WINDOW, PCOS_HIGH_STRESS_LEVEL, WINDOW_RULES,
};
