use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount error: value [{0}] is negative")]
    Negative(f64),
    #[error("Amount error: value [{0}] is not a finite number")]
    NotFinite(f64)
}
