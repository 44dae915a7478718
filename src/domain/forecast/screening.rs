//! Screening of a submission before the model is consulted.

use crate::domain::foundation::CalendarDate;
use crate::domain::profile::CycleProfile;

use super::notice::{messages, Notice};

/// Whether a submission may proceed to prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    /// Proceed to the model.
    Accepted,
    /// Blocking error; stop processing.
    Rejected(Notice),
    /// No prediction applies; show the notice instead.
    Skipped(Notice),
}

/// Screens a profile against today's date and its cycle status.
///
/// A last period date after `today` is rejected before anything else is
/// looked at. A post-menopausal cycle skips prediction.
pub fn screen_submission(profile: &CycleProfile, today: CalendarDate) -> Screening {
    if profile.last_period_date().is_after(&today) {
        return Screening::Rejected(Notice::error(messages::FUTURE_LAST_PERIOD));
    }

    if profile.cycle_regularity().is_post_menopausal() {
        return Screening::Skipped(Notice::info(messages::POST_MENOPAUSAL_SKIP));
    }

    Screening::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::CycleRegularity;

    fn today() -> CalendarDate {
        CalendarDate::from_ymd(2024, 3, 10).unwrap()
    }

    #[test]
    fn past_date_is_accepted() {
        let profile = CycleProfile::builder(today().plus_days(-20)).build().unwrap();
        assert_eq!(screen_submission(&profile, today()), Screening::Accepted);
    }

    #[test]
    fn same_day_is_accepted() {
        let profile = CycleProfile::builder(today()).build().unwrap();
        assert_eq!(screen_submission(&profile, today()), Screening::Accepted);
    }

    #[test]
    fn future_date_is_rejected() {
        let profile = CycleProfile::builder(today().plus_days(1)).build().unwrap();
        assert_eq!(
            screen_submission(&profile, today()),
            Screening::Rejected(Notice::error(messages::FUTURE_LAST_PERIOD))
        );
    }

    #[test]
    fn future_date_wins_over_post_menopausal_skip() {
        let profile = CycleProfile::builder(today().plus_days(3))
            .cycle_regularity(CycleRegularity::PostMenopausal)
            .build()
            .unwrap();
        assert!(matches!(
            screen_submission(&profile, today()),
            Screening::Rejected(_)
        ));
    }

    #[test]
    fn post_menopausal_is_skipped_with_info() {
        let profile = CycleProfile::builder(today().plus_days(-40))
            .cycle_regularity(CycleRegularity::PostMenopausal)
            .build()
            .unwrap();
        assert_eq!(
            screen_submission(&profile, today()),
            Screening::Skipped(Notice::info(messages::POST_MENOPAUSAL_SKIP))
        );
    }
}
