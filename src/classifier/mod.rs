mod errors;
mod pipeline;

use crate::models::{columns, TransactionRecord};

pub use errors::ClassifierError;
pub use pipeline::LinearPipeline;

/// An opaque, pre-trained fraud classifier.
///
/// Implementations are loaded once and shared read-only, so `predict` takes
/// `&self` and must be deterministic for a given table.
pub trait Classifier: Send + Sync {
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    /// Returns one raw label per table row.
    fn predict(&self, table: &FeatureTable) -> Result<Vec<u8>, ClassifierError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Text(String),
    Number(f64)
}

/// Column-named rows handed to a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<FeatureValue>>
}

impl FeatureTable {
    /// Builds the single-row table for one record using the training column names.
    pub fn from_record(record: &TransactionRecord) -> Self {
        let mut row = vec![FeatureValue::Text(record.transaction_type().as_str().to_string())];
        row.extend(record.numeric_fields().iter().map(|(_, value)| FeatureValue::Number(value.to_f64())));

        Self {
            columns: columns::ALL.iter().map(|column| column.to_string()).collect(),
            rows: vec![row]
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}
