//! PredictNextPeriodHandler - Command handler for one form submission.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::forecast::{
    check_prediction, estimate_window, matching_rules, screen_submission, ExpectedDateComparison,
    NextPeriodForecast, PredictionReport, Screening, WindowInputs,
};
use crate::domain::foundation::{CalendarDate, DomainError};
use crate::domain::profile::CycleProfile;
use crate::ports::{CyclePredictor, FeatureRow};

/// Command to predict the next period for a submitted profile.
#[derive(Debug, Clone)]
pub struct PredictNextPeriodCommand {
    pub profile: CycleProfile,
    /// The date the submission is judged against.
    pub today: CalendarDate,
}

/// Handler turning a submission into a [`PredictionReport`].
///
/// Never fails: every outcome, including a model error, is a report.
pub struct PredictNextPeriodHandler {
    predictor: Arc<dyn CyclePredictor>,
}

impl PredictNextPeriodHandler {
    pub fn new(predictor: Arc<dyn CyclePredictor>) -> Self {
        Self { predictor }
    }

    pub fn handle(&self, cmd: PredictNextPeriodCommand) -> PredictionReport {
        let profile = &cmd.profile;

        // 1. Screen the submission
        match screen_submission(profile, cmd.today) {
            Screening::Accepted => {}
            Screening::Rejected(notice) => {
                warn!(
                    last_period_date = %profile.last_period_date(),
                    today = %cmd.today,
                    "Rejected submission with future last period date"
                );
                return PredictionReport::rejected(notice);
            }
            Screening::Skipped(notice) => {
                debug!("Skipped prediction for post-menopausal cycle");
                return PredictionReport::skipped(notice);
            }
        }

        // 2. Ask the model
        let features = FeatureRow::from(profile);
        let predicted_days = match self.predictor.predict(&features) {
            Ok(days) => days,
            Err(e) => {
                let err = DomainError::from(e);
                error!(code = %err.code, error = %err.message, "Prediction model failed");
                return PredictionReport::failed();
            }
        };

        // 3. Window and plausibility
        let inputs = WindowInputs::from_profile(profile, predicted_days);
        let window = estimate_window(&inputs);
        let plausibility = check_prediction(&inputs);
        if !plausibility.is_plausible() {
            warn!(
                predicted_days,
                notices = plausibility.notices().len(),
                "Prediction outside normal range"
            );
            return PredictionReport::out_of_range(plausibility.into_notices());
        }
        let plausibility_notices = plausibility.into_notices();

        // 4. Dates and optional comparison
        let forecast = NextPeriodForecast::new(profile.last_period_date(), predicted_days, window);
        let comparison = profile
            .expected_date()
            .map(|text| ExpectedDateComparison::evaluate(forecast.predicted_date, text));

        debug!(
            predicted_days,
            predicted_date = %forecast.predicted_date,
            low = window.low,
            high = window.high,
            rules = ?matching_rules(&inputs),
            "Prediction ready"
        );

        PredictionReport::predicted(plausibility_notices, forecast, comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::{messages, Notice, NoticeLevel, ReportStatus, UncertaintyWindow};
    use crate::domain::profile::{CycleRegularity, YesNo};
    use crate::ports::PredictorError;
    use std::sync::Mutex;

    struct MockPredictor {
        result: Result<f64, PredictorError>,
        calls: Mutex<Vec<FeatureRow>>,
    }

    impl MockPredictor {
        fn returning(days: f64) -> Self {
            Self {
                result: Ok(days),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(PredictorError::Evaluation("simulated failure".to_string())),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl CyclePredictor for MockPredictor {
        fn predict(&self, features: &FeatureRow) -> Result<f64, PredictorError> {
            self.calls.lock().unwrap().push(features.clone());
            self.result.clone()
        }
    }

    fn today() -> CalendarDate {
        CalendarDate::from_ymd(2024, 1, 10).unwrap()
    }

    fn jan_first() -> CalendarDate {
        CalendarDate::from_ymd(2024, 1, 1).unwrap()
    }

    fn regular_profile() -> CycleProfile {
        CycleProfile::builder(jan_first())
            .birth_control(YesNo::No)
            .pcos(YesNo::No)
            .build()
            .unwrap()
    }

    fn run(predictor: Arc<MockPredictor>, profile: CycleProfile) -> PredictionReport {
        let handler = PredictNextPeriodHandler::new(predictor);
        handler.handle(PredictNextPeriodCommand {
            profile,
            today: today(),
        })
    }

    #[test]
    fn regular_profile_is_predicted_with_base_window() {
        let predictor = Arc::new(MockPredictor::returning(28.0));
        let report = run(predictor.clone(), regular_profile());

        assert_eq!(report.status, ReportStatus::Predicted);
        let forecast = report.forecast.unwrap();
        assert_eq!(forecast.predicted_date.to_string(), "29-01-2024");
        assert_eq!(forecast.window, UncertaintyWindow::new(-2, 3));
        assert_eq!(forecast.earliest_date.to_string(), "27-01-2024");
        assert_eq!(forecast.latest_date.to_string(), "01-02-2024");
        assert_eq!(
            report.notices,
            vec![
                Notice::success("Your next period will likely fall between 27-01-2024 and 01-02-2024"),
                Notice::info("Model's Point Estimate: 28 days"),
            ]
        );
        assert_eq!(predictor.call_count(), 1);
    }

    #[test]
    fn predictor_receives_profile_features() {
        let predictor = Arc::new(MockPredictor::returning(28.0));
        let profile = CycleProfile::builder(jan_first())
            .avg_cycle_length(31)
            .cycle_regularity(CycleRegularity::MostlyRegular)
            .build()
            .unwrap();
        run(predictor.clone(), profile);

        let calls = predictor.calls.lock().unwrap();
        assert_eq!(calls[0].avg_cycle_length, 31.0);
        assert_eq!(calls[0].cycle_regularity, "Mostly Regular");
    }

    #[test]
    fn future_date_is_rejected_without_calling_model() {
        let predictor = Arc::new(MockPredictor::returning(28.0));
        let profile = CycleProfile::builder(today().plus_days(1)).build().unwrap();
        let report = run(predictor.clone(), profile);

        assert_eq!(report.status, ReportStatus::Rejected);
        assert_eq!(
            report.notices,
            vec![Notice::error(messages::FUTURE_LAST_PERIOD)]
        );
        assert!(report.forecast.is_none());
        assert_eq!(predictor.call_count(), 0);
    }

    #[test]
    fn post_menopausal_is_skipped_without_calling_model() {
        let predictor = Arc::new(MockPredictor::returning(28.0));
        let profile = CycleProfile::builder(jan_first())
            .cycle_regularity(CycleRegularity::PostMenopausal)
            .build()
            .unwrap();
        let report = run(predictor.clone(), profile);

        assert_eq!(report.status, ReportStatus::Skipped);
        assert_eq!(report.notices[0].level, NoticeLevel::Info);
        assert_eq!(predictor.call_count(), 0);
    }

    #[test]
    fn model_failure_becomes_generic_error() {
        let report = run(Arc::new(MockPredictor::failing()), regular_profile());

        assert_eq!(report.status, ReportStatus::Failed);
        assert_eq!(report.notices, vec![Notice::error(messages::PREDICTION_FAILED)]);
        assert!(!report.notices[0].message.contains("simulated"));
    }

    #[test]
    fn short_prediction_blocks_without_success() {
        let profile = CycleProfile::builder(jan_first())
            .pcos(YesNo::Yes)
            .stress_level(9)
            .expected_date(Some("11-01-2024"))
            .build()
            .unwrap();
        let report = run(Arc::new(MockPredictor::returning(10.0)), profile);

        assert_eq!(report.status, ReportStatus::OutOfRange);
        assert_eq!(
            report.notices,
            vec![Notice::warning(messages::OUTSIDE_NORMAL_RANGE)]
        );
        assert!(report.forecast.is_none());
        assert!(report.comparison.is_none());
        assert!(report
            .notices
            .iter()
            .all(|n| n.level != NoticeLevel::Success));
    }

    #[test]
    fn irregular_pcos_profile_uses_pcos_window_and_note() {
        let profile = CycleProfile::builder(jan_first())
            .cycle_regularity(CycleRegularity::Irregular)
            .pcos(YesNo::Yes)
            .stress_level(5)
            .birth_control(YesNo::No)
            .build()
            .unwrap();
        let report = run(Arc::new(MockPredictor::returning(33.0)), profile);

        assert_eq!(
            report.forecast.as_ref().unwrap().window,
            UncertaintyWindow::new(-5, 12)
        );
        assert_eq!(report.notices[0], Notice::info(messages::WIDENED_RANGE));
    }

    #[test]
    fn older_user_sees_warning_before_result() {
        let profile = CycleProfile::builder(jan_first())
            .age(57)
            .pcos(YesNo::No)
            .build()
            .unwrap();
        let report = run(Arc::new(MockPredictor::returning(30.0)), profile);

        assert_eq!(report.status, ReportStatus::Predicted);
        assert_eq!(
            report.notices[0],
            Notice::warning(messages::VERIFY_MENOPAUSAL_STATUS)
        );
        assert_eq!(report.notices[1].level, NoticeLevel::Success);
    }

    #[test]
    fn close_expected_date_is_affirmed() {
        let profile = CycleProfile::builder(jan_first())
            .pcos(YesNo::No)
            .birth_control(YesNo::No)
            .expected_date(Some("31-01-2024"))
            .build()
            .unwrap();
        let report = run(Arc::new(MockPredictor::returning(28.0)), profile);

        assert!(report.comparison.as_ref().unwrap().is_aligned());
        assert_eq!(
            report.notices.last(),
            Some(&Notice::success(messages::EXPECTED_DATE_ALIGNED))
        );
    }

    #[test]
    fn malformed_expected_date_keeps_prediction() {
        let profile = CycleProfile::builder(jan_first())
            .pcos(YesNo::No)
            .expected_date(Some("2024-01-01"))
            .build()
            .unwrap();
        let report = run(Arc::new(MockPredictor::returning(28.0)), profile);

        assert_eq!(report.status, ReportStatus::Predicted);
        assert!(report.forecast.is_some());
        assert_eq!(
            report.notices.last(),
            Some(&Notice::warning(messages::EXPECTED_DATE_FORMAT))
        );
    }

    #[test]
    fn predicted_or_out_of_range_never_both() {
        for days in [5.0, 17.9, 18.0, 28.0, 45.0, 45.1, 90.0] {
            let report = run(Arc::new(MockPredictor::returning(days)), regular_profile());
            let successes = report
                .notices
                .iter()
                .filter(|n| n.level == NoticeLevel::Success)
                .count();
            match report.status {
                ReportStatus::Predicted => assert!(successes >= 1, "{days}"),
                ReportStatus::OutOfRange => assert_eq!(successes, 0, "{days}"),
                other => panic!("unexpected status {other} for {days}"),
            }
        }
    }
}
