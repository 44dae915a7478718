//! HTTP adapters - REST API implementations.

pub mod prediction;

// Re-export key types for convenience
pub use prediction::prediction_routes;
pub use prediction::PredictionAppState;
