//! Prediction HTTP adapter module.
//!
//! Exposes the prediction form via REST API:
//! - `POST /api/predictions` - Submit the form and receive display notices
//! - `GET /api/model` - Describe the loaded model and disclaimers
//! - `GET /api/form` - Describe the form inputs
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, ModelInfoResponse, PredictionRequest, PredictionResponse};
pub use handlers::PredictionAppState;
pub use routes::prediction_routes;
