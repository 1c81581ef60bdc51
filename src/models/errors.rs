use thiserror::Error;

use crate::types::AmountError;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Transaction type [{value}] is not one of PAYMENT, TRANSFER, CASH_OUT, CASH_IN, DEBIT")]
    UnknownType {
        value: String
    },
    #[error("Field [{field}] is invalid: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: AmountError
    }
}

impl ValidationError {
    pub fn invalid_field(field: &'static str, source: AmountError) -> Self {
        Self::InvalidField { field, source }
    }

    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::UnknownType { .. } => "type",
            ValidationError::InvalidField { field, .. } => field
        }
    }
}
