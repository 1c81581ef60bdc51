mod amount;
mod errors;
#[cfg(test)]
mod tests;

pub use amount::Amount;
pub use errors::AmountError;

/// One-based position of a data row in the input file (header excluded).
pub type RowNumber = u64;
