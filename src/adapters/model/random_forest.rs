//! Random forest regressor loaded from a JSON artifact.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ports::{
    CyclePredictor, FeatureRow, PredictorError, CATEGORICAL_FEATURES, FEATURE_COLUMNS,
    NUMERIC_FEATURES,
};

use super::encoder::FeatureEncoder;
use super::error::ModelLoadError;

/// Tree node: either a threshold split or a leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        /// Index into the encoded row
        feature: usize,
        /// Rows with `x[feature] <= threshold` go left
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        value: f64,
    },
}

impl TreeNode {
    /// Walks from this node to a leaf and returns its value.
    pub fn evaluate(&self, row: &[f64]) -> Result<f64, PredictorError> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = row.get(*feature).ok_or_else(|| {
                        PredictorError::Evaluation(format!(
                            "split on feature {} but row has {} values",
                            feature,
                            row.len()
                        ))
                    })?;
                    node = if *x <= *threshold { left } else { right };
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }

    /// Largest feature index used by any split, if any.
    fn max_feature(&self) -> Option<usize> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split {
                feature,
                left,
                right,
                ..
            } => [Some(*feature), left.max_feature(), right.max_feature()]
                .into_iter()
                .flatten()
                .max(),
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            TreeNode::Leaf { value } => value.is_finite(),
            TreeNode::Split {
                threshold,
                left,
                right,
                ..
            } => threshold.is_finite() && left.is_finite() && right.is_finite(),
        }
    }
}

/// Descriptive fields carried by the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,
    #[serde(default = "default_model_type")]
    pub model_type: String,
    #[serde(default)]
    pub trained_on: String,
    #[serde(default = "default_target")]
    pub target: String,
}

fn default_model_type() -> String {
    "Random Forest Regressor".to_string()
}

fn default_target() -> String {
    "Estimated number of days until next period".to_string()
}

/// On-disk layout of the model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    #[serde(flatten)]
    metadata: ModelMetadata,
    encoder: FeatureEncoder,
    trees: Vec<TreeNode>,
}

/// Averaging ensemble of regression trees over encoded features.
#[derive(Debug, Clone)]
pub struct RandomForestModel {
    metadata: ModelMetadata,
    encoder: FeatureEncoder,
    trees: Vec<TreeNode>,
}

impl RandomForestModel {
    /// Builds a model after checking it against the feature schema.
    ///
    /// # Errors
    ///
    /// Returns `ModelLoadError` if:
    /// - there are no trees
    /// - the encoder's numeric or categorical columns differ from the schema's,
    ///   including their order
    /// - a categorical column has no categories
    /// - a split references a feature beyond the encoded width
    /// - a threshold or leaf value is NaN or infinite
    pub fn new(
        metadata: ModelMetadata,
        encoder: FeatureEncoder,
        trees: Vec<TreeNode>,
    ) -> Result<Self, ModelLoadError> {
        if trees.is_empty() {
            return Err(ModelLoadError::NoTrees);
        }

        let numeric_matches = encoder.numeric.iter().eq(NUMERIC_FEATURES.iter());
        let categorical_matches = encoder
            .categorical
            .iter()
            .map(|c| c.column.as_str())
            .eq(CATEGORICAL_FEATURES.iter().copied());
        if !numeric_matches || !categorical_matches {
            return Err(ModelLoadError::SchemaMismatch {
                expected: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                found: encoder.columns(),
            });
        }

        if let Some(empty) = encoder.categorical.iter().find(|c| c.categories.is_empty()) {
            return Err(ModelLoadError::EmptyCategories(empty.column.clone()));
        }

        let width = encoder.width();
        for (index, tree) in trees.iter().enumerate() {
            if let Some(feature) = tree.max_feature().filter(|f| *f >= width) {
                return Err(ModelLoadError::FeatureOutOfRange {
                    tree: index,
                    feature,
                    width,
                });
            }
            if !tree.is_finite() {
                return Err(ModelLoadError::NonFiniteNode(index));
            }
        }

        Ok(Self {
            metadata,
            encoder,
            trees,
        })
    }

    /// Parses and validates an artifact from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ModelLoadError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::new(artifact.metadata, artifact.encoder, artifact.trees)
    }

    /// Reads, parses and validates the artifact at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            name = %model.metadata.name,
            trees = model.n_trees(),
            max_depth = model.max_depth(),
            "Loaded prediction model"
        );
        Ok(model)
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn feature_columns(&self) -> Vec<String> {
        self.encoder.columns()
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(TreeNode::depth).max().unwrap_or(0)
    }
}

impl CyclePredictor for RandomForestModel {
    fn predict(&self, features: &FeatureRow) -> Result<f64, PredictorError> {
        let row = self.encoder.encode(features)?;

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(&row)?;
        }
        let estimate = total / self.trees.len() as f64;

        if !estimate.is_finite() {
            return Err(PredictorError::NonFiniteEstimate(estimate));
        }

        debug!(estimate, "Model estimate computed");
        Ok(estimate)
    }
}
