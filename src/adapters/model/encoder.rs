//! Feature encoding: numeric passthrough followed by one-hot categoricals.

use serde::{Deserialize, Serialize};

use crate::ports::{FeatureRow, PredictorError};

/// One categorical column and the categories seen in training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub column: String,
    pub categories: Vec<String>,
}

/// Turns a [`FeatureRow`] into the dense vector the trees were trained on.
///
/// Layout: every numeric column in declared order, then one block per
/// categorical column with a `1.0` at the matching category. A category not
/// seen in training encodes as an all-zero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureEncoder {
    pub numeric: Vec<String>,
    pub categorical: Vec<CategoricalColumn>,
}

impl FeatureEncoder {
    /// Length of an encoded row.
    pub fn width(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|c| c.categories.len())
                .sum::<usize>()
    }

    /// Column names covered by this encoder, numeric first.
    pub fn columns(&self) -> Vec<String> {
        self.numeric
            .iter()
            .cloned()
            .chain(self.categorical.iter().map(|c| c.column.clone()))
            .collect()
    }

    pub fn encode(&self, row: &FeatureRow) -> Result<Vec<f64>, PredictorError> {
        let mut encoded = Vec::with_capacity(self.width());

        for column in &self.numeric {
            let value = row
                .numeric(column)
                .ok_or_else(|| PredictorError::UnknownFeature(column.clone()))?;
            encoded.push(value);
        }

        for column in &self.categorical {
            let value = row
                .categorical(&column.column)
                .ok_or_else(|| PredictorError::UnknownFeature(column.column.clone()))?;
            encoded.extend(
                column
                    .categories
                    .iter()
                    .map(|category| if category == value { 1.0 } else { 0.0 }),
            );
        }

        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> FeatureEncoder {
        FeatureEncoder {
            numeric: vec!["age".to_string(), "BMI".to_string()],
            categorical: vec![
                CategoricalColumn {
                    column: "PCOS".to_string(),
                    categories: vec!["No".to_string(), "Yes".to_string()],
                },
                CategoricalColumn {
                    column: "symptoms".to_string(),
                    categories: vec!["Bloating".to_string(), "Cramps".to_string()],
                },
            ],
        }
    }

    fn row(symptoms: &'static str) -> FeatureRow {
        FeatureRow {
            avg_cycle_length: 28.0,
            period_length: 5.0,
            age: 30.0,
            stress_level: 4.0,
            bmi: 21.5,
            cycle_regularity: "Regular",
            symptoms,
            birth_control: "No",
            pcos: "Yes",
        }
    }

    #[test]
    fn width_counts_numeric_and_categories() {
        assert_eq!(encoder().width(), 6);
    }

    #[test]
    fn encodes_numeric_then_one_hot() {
        let encoded = encoder().encode(&row("Cramps")).unwrap();
        assert_eq!(encoded, vec![30.0, 21.5, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn unseen_category_encodes_as_zeros() {
        let encoded = encoder().encode(&row("Multiple")).unwrap();
        assert_eq!(&encoded[4..], &[0.0, 0.0]);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let mut encoder = encoder();
        encoder.numeric.push("weight".to_string());
        let err = encoder.encode(&row("None")).unwrap_err();
        assert!(matches!(err, PredictorError::UnknownFeature(c) if c == "weight"));
    }

    #[test]
    fn columns_lists_numeric_first() {
        assert_eq!(encoder().columns(), vec!["age", "BMI", "PCOS", "symptoms"]);
    }
}
