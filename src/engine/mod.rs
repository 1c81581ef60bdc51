mod batch_engine;
mod report;
#[cfg(test)]
mod tests;

pub use batch_engine::BatchEngine;
pub use report::{BatchReport, RowOutcome};
