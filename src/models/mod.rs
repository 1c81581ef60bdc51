mod errors;
mod prediction;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use errors::ValidationError;
pub use prediction::{Label, PredictionResult};
pub use transaction::{build_record, columns, RawTransaction, TransactionRecord};

/// Transaction categories, spelled exactly as the classifier was trained on them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionType {
    Payment,
    Transfer,
    CashOut,
    CashIn,
    Debit
}

impl TransactionType {
    pub const ALL: [TransactionType; 5] = [
        TransactionType::Payment,
        TransactionType::Transfer,
        TransactionType::CashOut,
        TransactionType::CashIn,
        TransactionType::Debit
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Payment => "PAYMENT",
            TransactionType::Transfer => "TRANSFER",
            TransactionType::CashOut => "CASH_OUT",
            TransactionType::CashIn => "CASH_IN",
            TransactionType::Debit => "DEBIT"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    /// Matching is case-sensitive: `payment` is not a type the classifier knows.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        TransactionType::ALL.into_iter()
            .find(|transaction_type| transaction_type.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownType { value: value.to_string() })
    }
}
