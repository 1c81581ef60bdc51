use thiserror::Error;

use crate::classifier::ClassifierError;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Classifier rejected the record: {0}")]
    SchemaMismatch(ClassifierError),
    #[error("Classification service is unavailable: {reason}")]
    ServiceUnavailable {
        reason: String
    },
    #[error("Classifier returned an invalid response: {reason}")]
    InvalidOutput {
        reason: String
    }
}

impl From<ClassifierError> for EvaluationError {
    fn from(error: ClassifierError) -> Self {
        match error {
            ClassifierError::UndefinedScore { .. } => Self::InvalidOutput { reason: error.to_string() },
            other => Self::SchemaMismatch(other)
        }
    }
}
