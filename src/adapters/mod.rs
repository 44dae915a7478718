//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `model` - `CyclePredictor` backed by the serialized random forest
//! - `http` - Axum routes serving the prediction form

pub mod http;
pub mod model;

pub use model::{FixedPredictor, ModelLoadError, RandomForestModel};
