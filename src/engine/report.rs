use crate::models::PredictionResult;
use crate::types::RowNumber;

#[derive(Debug)]
pub enum RowOutcome {
    Evaluated {
        row: RowNumber,
        result: PredictionResult
    },
    /// The row never reached the classifier.
    Rejected {
        row: RowNumber,
        reason: String
    },
    /// The classifier could not produce a verdict for a valid row.
    Failed {
        row: RowNumber,
        reason: String
    }
}

impl RowOutcome {
    pub fn row(&self) -> RowNumber {
        match self {
            RowOutcome::Evaluated { row, .. } | RowOutcome::Rejected { row, .. } | RowOutcome::Failed { row, .. } => *row
        }
    }
}

/// Per-row outcomes in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RowOutcome>
}

impl BatchReport {
    pub fn evaluated(&self) -> usize {
        self.outcomes.iter().filter(|outcome| matches!(outcome, RowOutcome::Evaluated { .. })).count()
    }

    pub fn fraudulent(&self) -> usize {
        self.outcomes.iter()
            .filter(|outcome| matches!(outcome, RowOutcome::Evaluated { result, .. } if result.is_fraudulent()))
            .count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|outcome| matches!(outcome, RowOutcome::Rejected { .. })).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| matches!(outcome, RowOutcome::Failed { .. })).count()
    }
}
