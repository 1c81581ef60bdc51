use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Schema mismatch: column [{column}] is missing")]
    MissingColumn {
        column: String
    },
    #[error("Schema mismatch: column [{column}] was not seen during training")]
    UnexpectedColumn {
        column: String
    },
    #[error("Schema mismatch: column [{column}] expects a {expected} value in row [{row}]")]
    WrongKind {
        column: String,
        row: usize,
        expected: &'static str
    },
    #[error("Schema mismatch: category [{value}] of column [{column}] was not seen during training")]
    UnknownCategory {
        column: String,
        value: String
    },
    #[error("Schema mismatch: row [{row}] has {actual} values for {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize
    },
    #[error("Score for row [{row}] is not a finite number")]
    UndefinedScore {
        row: usize
    }
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Model artifact could not be read: {0}")]
    Io(#[from] io::Error),
    #[error("Model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Model artifact is invalid: {0}")]
    Invalid(String)
}
