//! HTTP routes for prediction endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_form_schema, get_model_info, health, submit_prediction, PredictionAppState,
};

/// Creates the prediction router with all routes.
pub fn prediction_routes(state: PredictionAppState) -> Router {
    Router::new()
        // POST /api/predictions
        .route("/api/predictions", post(submit_prediction))
        // GET /api/model
        .route("/api/model", get(get_model_info))
        // GET /api/form
        .route("/api/form", get(get_form_schema))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
}
