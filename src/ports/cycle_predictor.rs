//! CyclePredictor port - the pre-trained regression model.
//!
//! The model is opaque to the domain: it receives one [`FeatureRow`] and
//! answers with the number of days until the next period. Column names are
//! the contract with the trained artifact; renaming or dropping a column
//! without retraining breaks prediction.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::CycleProfile;

/// Numeric feature columns, in schema order.
pub const NUMERIC_FEATURES: [&str; 5] = [
    "avg_cycle_length",
    "period_length",
    "age",
    "stress_level",
    "BMI",
];

/// Categorical feature columns, in schema order.
pub const CATEGORICAL_FEATURES: [&str; 4] = ["cycle_regularity", "symptoms", "birth_control", "PCOS"];

/// Every feature column, in schema order.
pub const FEATURE_COLUMNS: [&str; 9] = [
    "avg_cycle_length",
    "period_length",
    "age",
    "stress_level",
    "BMI",
    "cycle_regularity",
    "symptoms",
    "birth_control",
    "PCOS",
];

/// One row of model input, keyed by the schema's column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub avg_cycle_length: f64,
    pub period_length: f64,
    pub age: f64,
    pub stress_level: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    pub cycle_regularity: &'static str,
    pub symptoms: &'static str,
    pub birth_control: &'static str,
    #[serde(rename = "PCOS")]
    pub pcos: &'static str,
}

impl FeatureRow {
    /// Looks up a numeric column by schema name.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "avg_cycle_length" => Some(self.avg_cycle_length),
            "period_length" => Some(self.period_length),
            "age" => Some(self.age),
            "stress_level" => Some(self.stress_level),
            "BMI" => Some(self.bmi),
            _ => None,
        }
    }

    /// Looks up a categorical column by schema name.
    pub fn categorical(&self, column: &str) -> Option<&'static str> {
        match column {
            "cycle_regularity" => Some(self.cycle_regularity),
            "symptoms" => Some(self.symptoms),
            "birth_control" => Some(self.birth_control),
            "PCOS" => Some(self.pcos),
            _ => None,
        }
    }
}

impl From<&CycleProfile> for FeatureRow {
    fn from(profile: &CycleProfile) -> Self {
        Self {
            avg_cycle_length: f64::from(profile.avg_cycle_length()),
            period_length: f64::from(profile.period_length()),
            age: f64::from(profile.age()),
            stress_level: f64::from(profile.stress_level()),
            bmi: profile.bmi(),
            cycle_regularity: profile.cycle_regularity().label(),
            symptoms: profile.symptoms().label(),
            birth_control: profile.birth_control().label(),
            pcos: profile.pcos().label(),
        }
    }
}

/// Errors raised while building features for, or calling, the model.
#[derive(Debug, Clone, Error)]
pub enum PredictorError {
    #[error("Feature '{0}' is not part of the input schema")]
    UnknownFeature(String),

    #[error("Model produced a non-finite estimate: {0}")]
    NonFiniteEstimate(f64),

    #[error("Model evaluation failed: {0}")]
    Evaluation(String),
}

impl From<PredictorError> for DomainError {
    fn from(err: PredictorError) -> Self {
        let code = match err {
            PredictorError::UnknownFeature(_) => ErrorCode::ModelUnavailable,
            PredictorError::NonFiniteEstimate(_) | PredictorError::Evaluation(_) => {
                ErrorCode::PredictionFailed
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for the next-period regression model.
///
/// Implementations are loaded once at startup and shared across requests.
pub trait CyclePredictor: Send + Sync {
    /// Estimates the number of days from the last period to the next one.
    fn predict(&self, features: &FeatureRow) -> Result<f64, PredictorError>;
}
