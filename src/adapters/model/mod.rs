//! Model adapter - `CyclePredictor` backed by a serialized random forest.
//!
//! The artifact is produced offline by the training pipeline and read once
//! at startup. See [`RandomForestModel::load`].

mod encoder;
mod error;
mod fixed;
mod random_forest;

pub use encoder::{CategoricalColumn, FeatureEncoder};
pub use error::ModelLoadError;
pub use fixed::FixedPredictor;
pub use random_forest::{ModelMetadata, RandomForestModel, TreeNode};
