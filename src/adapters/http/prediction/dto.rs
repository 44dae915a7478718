//! HTTP DTOs for prediction endpoints.
//!
//! These types decouple the HTTP API from domain types. Dates arrive as ISO
//! `YYYY-MM-DD` from the date picker and leave formatted as `DD-MM-YYYY`.

use serde::{Deserialize, Serialize};

use crate::adapters::model::RandomForestModel;
use crate::domain::forecast::{
    messages, ExpectedDateComparison, NextPeriodForecast, Notice, PredictionReport, ReportStatus,
};
use crate::domain::foundation::{
    CalendarDate, DomainError, ValidationError, DISPLAY_DATE_PLACEHOLDER,
};
use crate::domain::profile::{
    CycleProfile, CycleRegularity, Symptoms, YesNo, AGE, AVG_CYCLE_LENGTH, BMI, PERIOD_LENGTH,
    STRESS_LEVEL,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A submitted prediction form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub last_period_date: CalendarDate,
    pub avg_cycle_length: i32,
    pub period_length: i32,
    pub age: i32,
    pub stress_level: i32,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    pub cycle_regularity: CycleRegularity,
    pub symptoms: Symptoms,
    pub birth_control: YesNo,
    #[serde(rename = "PCOS")]
    pub pcos: YesNo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<String>,
}

impl TryFrom<PredictionRequest> for CycleProfile {
    type Error = ValidationError;

    fn try_from(req: PredictionRequest) -> Result<Self, Self::Error> {
        CycleProfile::builder(req.last_period_date)
            .avg_cycle_length(req.avg_cycle_length)
            .period_length(req.period_length)
            .age(req.age)
            .stress_level(req.stress_level)
            .bmi(req.bmi)
            .cycle_regularity(req.cycle_regularity)
            .symptoms(req.symptoms)
            .birth_control(req.birth_control)
            .pcos(req.pcos)
            .expected_date(req.expected_date)
            .build()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Everything to display for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub status: ReportStatus,
    pub notices: Vec<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<ForecastView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonView>,
}

impl From<PredictionReport> for PredictionResponse {
    fn from(report: PredictionReport) -> Self {
        Self {
            status: report.status,
            notices: report.notices,
            forecast: report.forecast.map(ForecastView::from),
            comparison: report.comparison.map(ComparisonView::from),
        }
    }
}

/// Forecast with display-formatted dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastView {
    pub predicted_days: f64,
    pub point_estimate_days: i64,
    pub predicted_date: String,
    pub earliest_date: String,
    pub latest_date: String,
    pub window_low: i64,
    pub window_high: i64,
}

impl From<NextPeriodForecast> for ForecastView {
    fn from(forecast: NextPeriodForecast) -> Self {
        Self {
            predicted_days: forecast.predicted_days,
            point_estimate_days: forecast.point_estimate_days,
            predicted_date: forecast.predicted_date.to_display_string(),
            earliest_date: forecast.earliest_date.to_display_string(),
            latest_date: forecast.latest_date.to_display_string(),
            window_low: forecast.window.low,
            window_high: forecast.window.high,
        }
    }
}

/// Outcome of comparing the user's expected date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonView {
    pub parsed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_days: Option<i64>,
    pub aligned: bool,
}

impl From<ExpectedDateComparison> for ComparisonView {
    fn from(comparison: ExpectedDateComparison) -> Self {
        match comparison {
            ExpectedDateComparison::Compared {
                expected_date,
                error_days,
                aligned,
            } => Self {
                parsed: true,
                expected_date: Some(expected_date.to_display_string()),
                error_days: Some(error_days),
                aligned,
            },
            ExpectedDateComparison::Unparseable { .. } => Self {
                parsed: false,
                expected_date: None,
                error_days: None,
                aligned: false,
            },
        }
    }
}

/// "About this model" panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub name: String,
    pub model_type: String,
    pub trained_on: String,
    pub target: String,
    pub feature_columns: Vec<String>,
    pub n_trees: usize,
    pub uncertainty: String,
    pub disclaimer: String,
    pub privacy: String,
}

impl From<&RandomForestModel> for ModelInfoResponse {
    fn from(model: &RandomForestModel) -> Self {
        let metadata = model.metadata();
        Self {
            name: metadata.name.clone(),
            model_type: metadata.model_type.clone(),
            trained_on: metadata.trained_on.clone(),
            target: metadata.target.clone(),
            feature_columns: model.feature_columns(),
            n_trees: model.n_trees(),
            uncertainty: "Adjusted based on user health and cycle-related inputs".to_string(),
            disclaimer: messages::DISCLAIMER.to_string(),
            privacy: messages::PRIVACY.to_string(),
        }
    }
}

/// Input widget kind for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Date,
    Integer,
    Decimal,
    Select,
    Text,
}

/// Description of one form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub help: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FormField {
    fn new(name: &str, label: &str, help: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            help: help.to_string(),
            kind,
            required: true,
            min: None,
            max: None,
            default: None,
            options: Vec::new(),
            placeholder: None,
        }
    }

    fn bounded(mut self, min: f64, max: f64, default: serde_json::Value) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.default = Some(default);
        self
    }

    fn options(mut self, labels: &[&str]) -> Self {
        self.options = labels.iter().map(|l| l.to_string()).collect();
        self.default = labels.first().map(|l| serde_json::Value::from(*l));
        self
    }
}

/// The full prediction form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchemaResponse {
    pub fields: Vec<FormField>,
}

impl FormSchemaResponse {
    pub fn prediction_form() -> Self {
        let regularity: Vec<&str> = CycleRegularity::ALL.iter().map(|o| o.label()).collect();
        let symptoms: Vec<&str> = Symptoms::ALL.iter().map(|o| o.label()).collect();
        let yes_no: Vec<&str> = YesNo::ALL.iter().map(|o| o.label()).collect();

        let mut expected = FormField::new(
            "expected_date",
            "Your Expected Next Period Date (optional)",
            "Optional: Enter the date you think your next period will start.",
            FieldKind::Text,
        );
        expected.required = false;
        expected.placeholder = Some(DISPLAY_DATE_PLACEHOLDER.to_string());

        Self {
            fields: vec![
                FormField::new(
                    "last_period_date",
                    "Last Period Date",
                    "Select the first day of your most recent period.",
                    FieldKind::Date,
                ),
                FormField::new(
                    AVG_CYCLE_LENGTH.field,
                    "Avg Cycle Length (days)",
                    "Average days between the start of two consecutive periods.",
                    FieldKind::Integer,
                )
                .bounded(
                    f64::from(AVG_CYCLE_LENGTH.min),
                    f64::from(AVG_CYCLE_LENGTH.max),
                    AVG_CYCLE_LENGTH.default.into(),
                ),
                FormField::new(
                    PERIOD_LENGTH.field,
                    "Period Length (days)",
                    "How many days your period usually lasts.",
                    FieldKind::Integer,
                )
                .bounded(
                    f64::from(PERIOD_LENGTH.min),
                    f64::from(PERIOD_LENGTH.max),
                    PERIOD_LENGTH.default.into(),
                ),
                FormField::new(AGE.field, "Age", "Your current age in years.", FieldKind::Integer)
                    .bounded(f64::from(AGE.min), f64::from(AGE.max), AGE.default.into()),
                FormField::new(
                    STRESS_LEVEL.field,
                    "Stress Level (1-10)",
                    "Your current stress level. 1 is low, 10 is very high.",
                    FieldKind::Integer,
                )
                .bounded(
                    f64::from(STRESS_LEVEL.min),
                    f64::from(STRESS_LEVEL.max),
                    STRESS_LEVEL.default.into(),
                ),
                FormField::new(BMI.field, "BMI", "Your Body Mass Index (BMI).", FieldKind::Decimal)
                    .bounded(BMI.min, BMI.max, BMI.default.into()),
                FormField::new(
                    "cycle_regularity",
                    "Cycle Regularity",
                    "How consistent your menstrual cycles are.",
                    FieldKind::Select,
                )
                .options(&regularity),
                FormField::new(
                    "symptoms",
                    "Symptoms",
                    "Select the symptoms you typically experience before/during your period.",
                    FieldKind::Select,
                )
                .options(&symptoms),
                FormField::new(
                    "birth_control",
                    "On Birth Control?",
                    "Are you currently using any form of hormonal birth control?",
                    FieldKind::Select,
                )
                .options(&yes_no),
                FormField::new(
                    "PCOS",
                    "PCOS Diagnosed?",
                    "Have you been diagnosed with Polycystic Ovary Syndrome (PCOS)?",
                    FieldKind::Select,
                )
                .options(&yes_no),
                expected,
            ],
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            Some(serde_json::Value::Object(
                err.details
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::String(v)))
                    .collect(),
            ))
        };

        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}
