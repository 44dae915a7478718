//! Model artifact loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the model artifact
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model artifact contains no trees")]
    NoTrees,

    #[error("Encoder columns {found:?} do not match the feature schema {expected:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Categorical column '{0}' declares no categories")]
    EmptyCategories(String),

    #[error("Tree {tree} splits on feature {feature}, but rows only have {width} features")]
    FeatureOutOfRange {
        tree: usize,
        feature: usize,
        width: usize,
    },

    #[error("Tree {0} contains a non-finite threshold or leaf value")]
    NonFiniteNode(usize),
}
