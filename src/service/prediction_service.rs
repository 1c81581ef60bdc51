use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::classifier::{Classifier, FeatureTable, LinearPipeline};
use crate::models::{Label, PredictionResult, TransactionRecord};
use crate::service::errors::EvaluationError;

enum ServiceState {
    Ready(Arc<dyn Classifier>),
    Unavailable(String)
}

/// Process-wide handle on the classifier.
///
/// The artifact is loaded once by [`PredictionService::initialize`]; a failed
/// load leaves the service in an unavailable state instead of aborting, so
/// callers decide how to report it via [`PredictionService::ensure_ready`].
pub struct PredictionService {
    state: ServiceState
}

impl PredictionService {
    pub fn initialize(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match LinearPipeline::load(path) {
            Ok(pipeline) => {
                info!("Loaded model [{}] version [{}] from {}", pipeline.name(), pipeline.version(), path.display());
                Self::with_classifier(Arc::new(pipeline))
            },
            Err(error) => {
                error!("Model artifact at {} failed to load: {error}", path.display());
                Self { state: ServiceState::Unavailable(format!("{}: {error}", path.display())) }
            }
        }
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self { state: ServiceState::Ready(classifier) }
    }

    pub fn ensure_ready(&self) -> Result<(), EvaluationError> {
        self.classifier().map(|_| ())
    }

    /// Submits one record as a single-row table and returns its verdict.
    ///
    /// # Errors
    /// - `ServiceUnavailable` if the classifier never loaded.
    /// - `SchemaMismatch` if the classifier rejected the table.
    /// - `InvalidOutput` if the classifier did not answer with exactly one label in {0, 1}.
    pub fn evaluate(&self, record: &TransactionRecord) -> Result<PredictionResult, EvaluationError> {
        let classifier = self.classifier()?;
        let table = FeatureTable::from_record(record);
        let labels = classifier.predict(&table)?;

        let [raw_label] = labels.as_slice() else {
            return Err(EvaluationError::InvalidOutput {
                reason: format!("expected 1 label, got {}", labels.len())
            });
        };

        let label = Label::try_from(*raw_label).map_err(|value| EvaluationError::InvalidOutput {
            reason: format!("label [{value}] is neither 0 nor 1")
        })?;

        debug!("Record [{}]:[{}] classified as {label}", record.transaction_type(), record.amount());

        Ok(PredictionResult::new(label, record.clone()))
    }

    fn classifier(&self) -> Result<&dyn Classifier, EvaluationError> {
        match &self.state {
            ServiceState::Ready(classifier) => Ok(classifier.as_ref()),
            ServiceState::Unavailable(reason) => Err(EvaluationError::ServiceUnavailable { reason: reason.clone() })
        }
    }
}
