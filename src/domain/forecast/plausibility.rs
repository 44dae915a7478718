//! Plausibility checks run against a model estimate.
//!
//! These checks never change the window; they only decide which notices
//! accompany the prediction and whether it may be shown at all.

use std::ops::RangeInclusive;

use super::notice::{messages, Notice};
use super::uncertainty::WindowInputs;

/// Predictions outside this many days are not shown.
pub const NORMAL_PREDICTION_DAYS: RangeInclusive<f64> = 18.0..=45.0;

/// Age from which a non-post-menopausal cycle is questioned.
pub const MENOPAUSE_CHECK_AGE: u8 = 55;

/// Stress level from which the widened-range note is shown.
pub const HIGH_STRESS_NOTE_LEVEL: u8 = 8;

/// Outcome of checking a prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plausibility {
    /// Show the prediction along with these notices.
    Plausible { notices: Vec<Notice> },
    /// Do not show the prediction; only these notices.
    Implausible { notices: Vec<Notice> },
}

impl Plausibility {
    pub fn is_plausible(&self) -> bool {
        matches!(self, Plausibility::Plausible { .. })
    }

    pub fn notices(&self) -> &[Notice] {
        match self {
            Plausibility::Plausible { notices } | Plausibility::Implausible { notices } => notices,
        }
    }

    pub fn into_notices(self) -> Vec<Notice> {
        match self {
            Plausibility::Plausible { notices } | Plausibility::Implausible { notices } => notices,
        }
    }
}

/// Runs the checks in display order.
///
/// 1. Age at or over [`MENOPAUSE_CHECK_AGE`] without a post-menopausal
///    cycle: warning, processing continues.
/// 2. Estimate outside [`NORMAL_PREDICTION_DAYS`]: warning, stop.
/// 3. PCOS or stress at or over [`HIGH_STRESS_NOTE_LEVEL`]: info note.
pub fn check_prediction(inputs: &WindowInputs) -> Plausibility {
    let mut notices = Vec::new();

    if inputs.age >= MENOPAUSE_CHECK_AGE && !inputs.cycle_regularity.is_post_menopausal() {
        notices.push(Notice::warning(messages::VERIFY_MENOPAUSAL_STATUS));
    }

    if !NORMAL_PREDICTION_DAYS.contains(&inputs.predicted_days) {
        notices.push(Notice::warning(messages::OUTSIDE_NORMAL_RANGE));
        return Plausibility::Implausible { notices };
    }

    if inputs.pcos.is_yes() || inputs.stress_level >= HIGH_STRESS_NOTE_LEVEL {
        notices.push(Notice::info(messages::WIDENED_RANGE));
    }

    Plausibility::Plausible { notices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::notice::NoticeLevel;
    use crate::domain::profile::{CycleRegularity, YesNo};

    fn inputs(predicted_days: f64) -> WindowInputs {
        WindowInputs {
            predicted_days,
            pcos: YesNo::No,
            stress_level: 5,
            cycle_regularity: CycleRegularity::Regular,
            birth_control: YesNo::No,
            age: 25,
        }
    }

    #[test]
    fn typical_prediction_is_plausible_without_notices() {
        let result = check_prediction(&inputs(28.0));
        assert!(result.is_plausible());
        assert!(result.notices().is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(check_prediction(&inputs(18.0)).is_plausible());
        assert!(check_prediction(&inputs(45.0)).is_plausible());
        assert!(!check_prediction(&inputs(17.99)).is_plausible());
        assert!(!check_prediction(&inputs(45.01)).is_plausible());
    }

    #[test]
    fn short_prediction_blocks_with_warning() {
        let result = check_prediction(&inputs(10.0));
        assert_eq!(
            result,
            Plausibility::Implausible {
                notices: vec![Notice::warning(messages::OUTSIDE_NORMAL_RANGE)]
            }
        );
    }

    #[test]
    fn nan_prediction_is_implausible() {
        assert!(!check_prediction(&inputs(f64::NAN)).is_plausible());
    }

    #[test]
    fn age_warning_precedes_range_block() {
        let i = WindowInputs {
            age: 56,
            ..inputs(60.0)
        };
        let notices = check_prediction(&i).into_notices();
        assert_eq!(
            notices,
            vec![
                Notice::warning(messages::VERIFY_MENOPAUSAL_STATUS),
                Notice::warning(messages::OUTSIDE_NORMAL_RANGE),
            ]
        );
    }

    #[test]
    fn age_warning_is_not_blocking() {
        let i = WindowInputs {
            age: 55,
            ..inputs(30.0)
        };
        let result = check_prediction(&i);
        assert!(result.is_plausible());
        assert_eq!(result.notices()[0].level, NoticeLevel::Warning);
    }

    #[test]
    fn no_age_warning_when_post_menopausal() {
        let i = WindowInputs {
            age: 58,
            cycle_regularity: CycleRegularity::PostMenopausal,
            ..inputs(30.0)
        };
        assert!(check_prediction(&i).notices().is_empty());
    }

    #[test]
    fn widened_note_for_pcos_or_high_stress() {
        let pcos = WindowInputs {
            pcos: YesNo::Yes,
            ..inputs(30.0)
        };
        assert_eq!(
            check_prediction(&pcos).notices(),
            &[Notice::info(messages::WIDENED_RANGE)]
        );

        let stressed = WindowInputs {
            stress_level: 8,
            ..inputs(30.0)
        };
        assert_eq!(check_prediction(&stressed).notices().len(), 1);

        let moderate = WindowInputs {
            stress_level: 7,
            ..inputs(30.0)
        };
        assert!(check_prediction(&moderate).notices().is_empty());
    }

    #[test]
    fn widened_note_not_shown_when_blocked() {
        let i = WindowInputs {
            pcos: YesNo::Yes,
            ..inputs(50.0)
        };
        assert_eq!(
            check_prediction(&i).notices(),
            &[Notice::warning(messages::OUTSIDE_NORMAL_RANGE)]
        );
    }
}
