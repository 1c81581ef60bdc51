use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::TransactionRecord;

/// Binary classifier output.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Label {
    Legitimate = 0,
    Fraudulent = 1
}

impl Label {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            Label::Legitimate => "LEGITIMATE",
            Label::Fraudulent => "FRAUDULENT"
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Legitimate),
            1 => Ok(Label::Fraudulent),
            other => Err(other)
        }
    }
}

impl Display for Label {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.verdict())
    }
}

/// The verdict for one record, echoing the input it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: Label,
    pub record: TransactionRecord
}

impl PredictionResult {
    pub fn new(label: Label, record: TransactionRecord) -> Self {
        Self { label, record }
    }

    pub fn is_fraudulent(&self) -> bool {
        self.label == Label::Fraudulent
    }

    /// Operator facing message.
    pub fn summary(&self) -> String {
        format!("The transaction is predicted to be {}.", self.label.verdict())
    }
}
