//! NextPeriodForecast - the dates derived from one model estimate.

use serde::Serialize;

use crate::domain::foundation::CalendarDate;

use super::notice::Notice;
use super::uncertainty::UncertaintyWindow;

/// Rounds a day estimate to whole days, ties to even.
pub fn round_days(predicted_days: f64) -> i64 {
    predicted_days.round_ties_even() as i64
}

/// Predicted next period and its calendar range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextPeriodForecast {
    /// Raw model estimate.
    pub predicted_days: f64,
    /// `predicted_days` rounded to whole days.
    pub point_estimate_days: i64,
    pub predicted_date: CalendarDate,
    pub window: UncertaintyWindow,
    pub earliest_date: CalendarDate,
    pub latest_date: CalendarDate,
}

impl NextPeriodForecast {
    pub fn new(
        last_period_date: CalendarDate,
        predicted_days: f64,
        window: UncertaintyWindow,
    ) -> Self {
        let point_estimate_days = round_days(predicted_days);
        let predicted_date = last_period_date.plus_days(point_estimate_days);

        Self {
            predicted_days,
            point_estimate_days,
            predicted_date,
            window,
            earliest_date: predicted_date.plus_days(window.low),
            latest_date: predicted_date.plus_days(window.high),
        }
    }

    /// The range message and the point estimate, in display order.
    pub fn notices(&self) -> Vec<Notice> {
        vec![
            Notice::success(format!(
                "Your next period will likely fall between {} and {}",
                self.earliest_date, self.latest_date
            )),
            Notice::info(format!(
                "Model's Point Estimate: {} days",
                self.point_estimate_days
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_first() -> CalendarDate {
        CalendarDate::from_ymd(2024, 1, 1).unwrap()
    }

    #[test]
    fn twenty_eight_days_with_base_window() {
        let forecast = NextPeriodForecast::new(jan_first(), 28.0, UncertaintyWindow::new(-2, 3));

        assert_eq!(forecast.predicted_date.to_string(), "29-01-2024");
        assert_eq!(forecast.earliest_date.to_string(), "27-01-2024");
        assert_eq!(forecast.latest_date.to_string(), "01-02-2024");
        assert_eq!(forecast.point_estimate_days, 28);
    }

    #[test]
    fn rounds_fractional_estimates() {
        assert_eq!(round_days(27.4), 27);
        assert_eq!(round_days(27.6), 28);
    }

    #[test]
    fn rounds_halves_to_even() {
        assert_eq!(round_days(28.5), 28);
        assert_eq!(round_days(29.5), 30);
    }

    #[test]
    fn predicted_date_uses_rounded_days() {
        let forecast = NextPeriodForecast::new(jan_first(), 30.7, UncertaintyWindow::new(-2, 3));
        assert_eq!(forecast.predicted_date, jan_first().plus_days(31));
        assert_eq!(forecast.predicted_days, 30.7);
    }

    #[test]
    fn notices_show_range_then_point_estimate() {
        let forecast = NextPeriodForecast::new(jan_first(), 28.2, UncertaintyWindow::new(-2, 3));
        let notices = forecast.notices();

        assert_eq!(
            notices,
            vec![
                Notice::success("Your next period will likely fall between 27-01-2024 and 01-02-2024"),
                Notice::info("Model's Point Estimate: 28 days"),
            ]
        );
    }
}
