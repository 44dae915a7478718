//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod predict_next_period;

pub use predict_next_period::{PredictNextPeriodCommand, PredictNextPeriodHandler};
