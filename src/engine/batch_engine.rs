use crate::engine::report::{BatchReport, RowOutcome};
use crate::models::{build_record, RawTransaction};
use crate::service::{EvaluationError, PredictionService};
use crate::types::RowNumber;
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

type RowResult = (RowNumber, Result<RawTransaction, String>);

/// Feeds CSV rows through the prediction contract, one row at a time.
pub struct BatchEngine {
    service: Arc<PredictionService>,
    backpressure: usize
}

impl BatchEngine {
    pub fn new(service: Arc<PredictionService>) -> Self {
        Self {
            service,
            backpressure: 256
        }
    }

    /// Bounds how many decoded rows may wait for evaluation.
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Evaluates every row of a CSV file, preserving input order.
    ///
    /// Invalid rows and per-row classifier failures are recorded in the report.
    /// The run itself only fails if the file cannot be opened or the service is unavailable.
    pub async fn run(&self, path: &str) -> anyhow::Result<BatchReport> {
        self.service.ensure_ready()?;

        let file = File::open(path).with_context(|| format!("Could not read input file at path: {path}"))?;
        let (sender, receiver) = mpsc::channel::<RowResult>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(file, sender);
        let processing_result = self.process_rows(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    fn spawn_csv_reader(&self, file: File, sender: mpsc::Sender<RowResult>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .from_reader(BufReader::new(file));

            for (index, result) in reader.deserialize::<RawTransaction>().enumerate() {
                let row = index as RowNumber + 1;
                let result = result.map_err(|error| {
                    error!("CSV deserialization error in row [{row}]: {error}");
                    error.to_string()
                });

                if sender.blocking_send((row, result)).is_err() {
                    break;
                }
            }
        })
    }

    async fn process_rows(&self, mut receiver: mpsc::Receiver<RowResult>) -> anyhow::Result<BatchReport> {
        let mut report = BatchReport::default();

        while let Some((row, result)) = receiver.recv().await {
            let outcome = match result {
                Ok(raw) => self.evaluate_row(row, &raw)?,
                Err(reason) => RowOutcome::Rejected { row, reason }
            };

            report.outcomes.push(outcome);
        }

        info!(
            "Evaluated [{}] rows: [{}] fraudulent, [{}] rejected, [{}] failed",
            report.evaluated(), report.fraudulent(), report.rejected(), report.failed()
        );

        Ok(report)
    }

    fn evaluate_row(&self, row: RowNumber, raw: &RawTransaction) -> anyhow::Result<RowOutcome> {
        let record = match build_record(
            &raw.transaction_type,
            raw.amount,
            raw.old_balance_sender,
            raw.new_balance_sender,
            raw.old_balance_receiver,
            raw.new_balance_receiver
        ) {
            Ok(record) => record,
            Err(error) => {
                warn!("Row [{row}] rejected at field [{}]: {error}", error.field());
                return Ok(RowOutcome::Rejected { row, reason: error.to_string() });
            }
        };

        match self.service.evaluate(&record) {
            Ok(result) => {
                debug!("Row [{row}]: {}", result.summary());
                Ok(RowOutcome::Evaluated { row, result })
            },
            Err(error @ EvaluationError::ServiceUnavailable { .. }) => Err(error.into()),
            Err(error) => {
                error!("Row [{row}] could not be evaluated: {error}");
                Ok(RowOutcome::Failed { row, reason: error.to_string() })
            }
        }
    }
}
