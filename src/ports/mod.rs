//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CyclePredictor` - The pre-trained next-period regression model

mod cycle_predictor;

pub use cycle_predictor::{
    CyclePredictor, FeatureRow, PredictorError, CATEGORICAL_FEATURES, FEATURE_COLUMNS,
    NUMERIC_FEATURES,
};
