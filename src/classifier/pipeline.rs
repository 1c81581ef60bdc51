use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::trace;

use crate::classifier::errors::{ArtifactError, ClassifierError};
use crate::classifier::{Classifier, FeatureTable, FeatureValue};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryWeight {
    value: String,
    weight: f64
}

/// One-hot encoded column: a row contributes the weight of its category.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoricalFeature {
    column: String,
    categories: Vec<CategoryWeight>
}

/// Standardized numeric column: a row contributes `weight * (x - mean) / scale`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct NumericFeature {
    column: String,
    mean: f64,
    scale: f64,
    weight: f64
}

/// Linear scoring pipeline with a logistic link, loaded from a JSON artifact.
///
/// ```json
/// {
///   "name": "fraud-logistic",
///   "version": "1",
///   "categorical": [{ "column": "type", "categories": [{ "value": "PAYMENT", "weight": -6.0 }] }],
///   "numeric": [{ "column": "amount", "mean": 0.0, "scale": 100000.0, "weight": 2.0 }],
///   "intercept": -1.0,
///   "threshold": 0.5
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearPipeline {
    name: String,
    version: String,
    categorical: Vec<CategoricalFeature>,
    numeric: Vec<NumericFeature>,
    intercept: f64,
    threshold: f64
}

enum Term<'a> {
    Categorical(&'a CategoricalFeature),
    Numeric(&'a NumericFeature)
}

impl LinearPipeline {
    /// Reads and validates an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let content = fs::read_to_string(path)?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ArtifactError> {
        let pipeline: LinearPipeline = serde_json::from_str(content)?;
        pipeline.validate()?;

        Ok(pipeline)
    }

    /// Fraud probability for every row of the table.
    pub fn probability(&self, table: &FeatureTable) -> Result<Vec<f64>, ClassifierError> {
        let terms = self.resolve_columns(table)?;

        table.rows.iter().enumerate().map(|(row_index, row)| {
            if row.len() != table.columns.len() {
                return Err(ClassifierError::RowWidth {
                    row: row_index,
                    expected: table.columns.len(),
                    actual: row.len()
                });
            }

            let mut score = self.intercept;

            for (column_index, term) in &terms {
                score += term.contribution(&row[*column_index], row_index)?;
            }

            // extreme inputs against tiny scales overflow to inf or inf - inf
            if !score.is_finite() {
                return Err(ClassifierError::UndefinedScore { row: row_index });
            }

            Ok(logistic(score))
        }).collect()
    }

    fn resolve_columns(&self, table: &FeatureTable) -> Result<Vec<(usize, Term<'_>)>, ClassifierError> {
        let expected: Vec<(&str, Term<'_>)> = self.categorical.iter()
            .map(|feature| (feature.column.as_str(), Term::Categorical(feature)))
            .chain(self.numeric.iter().map(|feature| (feature.column.as_str(), Term::Numeric(feature))))
            .collect();

        for (index, column) in table.columns.iter().enumerate() {
            let known = expected.iter().any(|(name, _)| *name == column.as_str());
            let first_occurrence = table.column_index(column) == Some(index);

            if !known || !first_occurrence {
                return Err(ClassifierError::UnexpectedColumn { column: column.clone() });
            }
        }

        expected.into_iter()
            .map(|(name, term)| {
                table.column_index(name)
                    .map(|index| (index, term))
                    .ok_or_else(|| ClassifierError::MissingColumn { column: name.to_string() })
            })
            .collect()
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        let invalid = |message: String| Err(ArtifactError::Invalid(message));

        if self.categorical.is_empty() && self.numeric.is_empty() {
            return invalid("no features declared".to_string());
        }

        if !self.intercept.is_finite() {
            return invalid("intercept is not a finite number".to_string());
        }

        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return invalid(format!("threshold [{}] must lie strictly between 0 and 1", self.threshold));
        }

        let mut seen_columns = HashSet::new();
        let columns = self.categorical.iter().map(|feature| &feature.column)
            .chain(self.numeric.iter().map(|feature| &feature.column));

        for column in columns {
            if !seen_columns.insert(column.as_str()) {
                return invalid(format!("column [{column}] is declared more than once"));
            }
        }

        for feature in &self.categorical {
            if feature.categories.is_empty() {
                return invalid(format!("column [{}] declares no categories", feature.column));
            }

            let mut seen_values = HashSet::new();

            for category in &feature.categories {
                if !seen_values.insert(category.value.as_str()) {
                    return invalid(format!("category [{}] of column [{}] is declared more than once", category.value, feature.column));
                }

                if !category.weight.is_finite() {
                    return invalid(format!("category [{}] of column [{}] has a non-finite weight", category.value, feature.column));
                }
            }
        }

        for feature in &self.numeric {
            if !(feature.mean.is_finite() && feature.weight.is_finite()) {
                return invalid(format!("column [{}] has a non-finite mean or weight", feature.column));
            }

            if !feature.scale.is_finite() || feature.scale == 0.0 {
                return invalid(format!("column [{}] has an unusable scale [{}]", feature.column, feature.scale));
            }
        }

        Ok(())
    }
}

impl Term<'_> {
    fn contribution(&self, value: &FeatureValue, row: usize) -> Result<f64, ClassifierError> {
        match (self, value) {
            (Term::Categorical(feature), FeatureValue::Text(text)) => {
                feature.categories.iter()
                    .find(|category| category.value == *text)
                    .map(|category| category.weight)
                    .ok_or_else(|| ClassifierError::UnknownCategory {
                        column: feature.column.clone(),
                        value: text.clone()
                    })
            },
            (Term::Numeric(feature), FeatureValue::Number(number)) => {
                Ok(feature.weight * (number - feature.mean) / feature.scale)
            },
            (Term::Categorical(feature), FeatureValue::Number(_)) => {
                Err(ClassifierError::WrongKind { column: feature.column.clone(), row, expected: "text" })
            },
            (Term::Numeric(feature), FeatureValue::Text(_)) => {
                Err(ClassifierError::WrongKind { column: feature.column.clone(), row, expected: "numeric" })
            }
        }
    }
}

impl Classifier for LinearPipeline {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn predict(&self, table: &FeatureTable) -> Result<Vec<u8>, ClassifierError> {
        let probabilities = self.probability(table)?;

        Ok(probabilities.into_iter().enumerate()
            .map(|(row, probability)| {
                trace!("Row [{row}] scored fraud probability [{probability:.6}] against threshold [{}]", self.threshold);
                u8::from(probability >= self.threshold)
            })
            .collect())
    }
}

fn logistic(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}
