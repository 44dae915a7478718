//! HTTP handlers for prediction endpoints.
//!
//! These handlers connect Axum routes to the application layer handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::debug;

use crate::application::{PredictNextPeriodCommand, PredictNextPeriodHandler};
use crate::domain::foundation::{CalendarDate, DomainError, ValidationError};
use crate::domain::profile::CycleProfile;
use crate::ports::CyclePredictor;

use super::dto::{
    ErrorResponse, FormSchemaResponse, ModelInfoResponse, PredictionRequest, PredictionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Prediction API error that implements IntoResponse.
///
/// Only input-layer problems are errors; every processing outcome is a
/// `PredictionResponse`.
pub enum PredictionApiError {
    /// The body could not be read as a prediction form.
    MalformedBody(JsonRejection),
    /// A field is outside its form bounds.
    InvalidField(ValidationError),
}

impl IntoResponse for PredictionApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            PredictionApiError::MalformedBody(rejection) => {
                (rejection.status(), ErrorResponse::bad_request(rejection.body_text()))
            }
            PredictionApiError::InvalidField(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::from(DomainError::from(err)),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for PredictionApiError {
    fn from(rejection: JsonRejection) -> Self {
        PredictionApiError::MalformedBody(rejection)
    }
}

impl From<ValidationError> for PredictionApiError {
    fn from(err: ValidationError) -> Self {
        PredictionApiError::InvalidField(err)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing prediction dependencies.
#[derive(Clone)]
pub struct PredictionAppState {
    pub predictor: Arc<dyn CyclePredictor>,
    pub model_info: Arc<ModelInfoResponse>,
}

impl PredictionAppState {
    pub fn new(predictor: Arc<dyn CyclePredictor>, model_info: ModelInfoResponse) -> Self {
        Self {
            predictor,
            model_info: Arc::new(model_info),
        }
    }

    pub fn predict_handler(&self) -> PredictNextPeriodHandler {
        PredictNextPeriodHandler::new(self.predictor.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/predictions
///
/// Runs one form submission and returns the notices to display.
pub async fn submit_prediction(
    State(state): State<PredictionAppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, PredictionApiError> {
    let Json(req) = payload?;
    let profile = CycleProfile::try_from(req).map_err(|err| {
        debug!(field = err.field(), error = %err, "Rejected form input");
        err
    })?;

    let cmd = PredictNextPeriodCommand {
        profile,
        today: CalendarDate::today(),
    };
    let report = state.predict_handler().handle(cmd);

    Ok(Json(PredictionResponse::from(report)))
}

/// GET /api/model
///
/// Describes the loaded model, its uncertainty handling and the disclaimers.
pub async fn get_model_info(State(state): State<PredictionAppState>) -> impl IntoResponse {
    Json(state.model_info.as_ref().clone())
}

/// GET /api/form
///
/// Describes every form input with its bounds, options and defaults.
pub async fn get_form_schema() -> impl IntoResponse {
    Json(FormSchemaResponse::prediction_form())
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
