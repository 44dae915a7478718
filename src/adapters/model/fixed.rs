//! Constant predictor for demos and tests.

use crate::ports::{CyclePredictor, FeatureRow, PredictorError};

/// Returns the same estimate for every row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPredictor {
    days: f64,
}

impl FixedPredictor {
    pub fn new(days: f64) -> Self {
        Self { days }
    }
}

impl CyclePredictor for FixedPredictor {
    fn predict(&self, _features: &FeatureRow) -> Result<f64, PredictorError> {
        if self.days.is_finite() {
            Ok(self.days)
        } else {
            Err(PredictorError::NonFiniteEstimate(self.days))
        }
    }
}
