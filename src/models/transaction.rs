use serde::Deserialize;

use crate::models::errors::ValidationError;
use crate::models::TransactionType;
use crate::types::Amount;

/// Column names the classifier was trained on. They must be submitted verbatim.
pub mod columns {
    pub const TYPE: &str = "type";
    pub const AMOUNT: &str = "amount";
    pub const OLD_BALANCE_SENDER: &str = "oldbalanceOrg";
    pub const NEW_BALANCE_SENDER: &str = "newbalanceOrig";
    pub const OLD_BALANCE_RECEIVER: &str = "oldbalanceDest";
    pub const NEW_BALANCE_RECEIVER: &str = "newbalanceDest";

    pub const ALL: [&str; 6] = [
        TYPE,
        AMOUNT,
        OLD_BALANCE_SENDER,
        NEW_BALANCE_SENDER,
        OLD_BALANCE_RECEIVER,
        NEW_BALANCE_RECEIVER
    ];
}

/// A validated transaction, ready to be submitted for evaluation.
///
/// Fields are private: the only way to obtain a record is through
/// [`build_record`], so every instance satisfies the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    transaction_type: TransactionType,
    amount: Amount,
    old_balance_sender: Amount,
    new_balance_sender: Amount,
    old_balance_receiver: Amount,
    new_balance_receiver: Amount
}

impl TransactionRecord {
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Numeric fields paired with their column names, in column order.
    pub fn numeric_fields(&self) -> [(&'static str, Amount); 5] {
        [
            (columns::AMOUNT, self.amount),
            (columns::OLD_BALANCE_SENDER, self.old_balance_sender),
            (columns::NEW_BALANCE_SENDER, self.new_balance_sender),
            (columns::OLD_BALANCE_RECEIVER, self.old_balance_receiver),
            (columns::NEW_BALANCE_RECEIVER, self.new_balance_receiver)
        ]
    }
}

/// Validates six raw scalar inputs and assembles a [`TransactionRecord`].
///
/// # Errors
/// Returns `ValidationError` if:
/// - `transaction_type` is not one of the five known literals.
/// - Any amount or balance is negative or not a finite number.
pub fn build_record(
    transaction_type: &str,
    amount: f64,
    old_balance_sender: f64,
    new_balance_sender: f64,
    old_balance_receiver: f64,
    new_balance_receiver: f64
) -> Result<TransactionRecord, ValidationError> {
    let field = |name: &'static str, value: f64| {
        Amount::try_from(value).map_err(|error| ValidationError::invalid_field(name, error))
    };

    Ok(TransactionRecord {
        transaction_type: transaction_type.parse()?,
        amount: field(columns::AMOUNT, amount)?,
        old_balance_sender: field(columns::OLD_BALANCE_SENDER, old_balance_sender)?,
        new_balance_sender: field(columns::NEW_BALANCE_SENDER, new_balance_sender)?,
        old_balance_receiver: field(columns::OLD_BALANCE_RECEIVER, old_balance_receiver)?,
        new_balance_receiver: field(columns::NEW_BALANCE_RECEIVER, new_balance_receiver)?
    })
}

/// Represents a single unvalidated row from the input CSV file.
///
/// Headers use the training column names. The type stays a string so an
/// unknown literal surfaces as a `ValidationError` instead of a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: f64,
    #[serde(rename = "oldbalanceOrg")]
    pub old_balance_sender: f64,
    #[serde(rename = "newbalanceOrig")]
    pub new_balance_sender: f64,
    #[serde(rename = "oldbalanceDest")]
    pub old_balance_receiver: f64,
    #[serde(rename = "newbalanceDest")]
    pub new_balance_receiver: f64
}
