mod classifier;
mod cli;
mod engine;
mod models;
mod service;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::{error, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{CliArgs, USAGE};
use crate::engine::{BatchEngine, BatchReport, RowOutcome};
use crate::service::PredictionService;

#[tokio::main]
async fn main() -> Result<()> {
    let args = match CliArgs::load() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    init_tracing(args.log_level);

    let service = PredictionService::initialize(&args.model_path);

    // a model that did not load is fatal, but reported rather than panicking
    if let Err(error) = service.ensure_ready() {
        error!("Refusing to evaluate [{}]: {error}", args.input_path);
        eprintln!("{error}");
        exit(2);
    }

    let mut engine = BatchEngine::new(Arc::new(service));

    if let Some(backpressure) = args.backpressure {
        engine = engine.with_backpressure(backpressure);
    }

    let timer = Instant::now();
    let report = engine.run(&args.input_path).await?;

    info!("Evaluated [{}] rows from [{}] in {:?}", report.outcomes.len(), args.input_path, timer.elapsed());

    write_results_to_stdout(&report)?;

    Ok(())
}

/// Verdicts own stdout; diagnostics go to stderr.
fn init_tracing(level: LevelFilter) {
    let diagnostics = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(diagnostics)
        .init();
}

fn write_results_to_stdout(report: &BatchReport) -> Result<()> {
    let mut output = csv::Writer::from_writer(BufWriter::new(stdout().lock()));

    output.write_record(["row", "type", "amount", "label", "verdict", "detail"])?;

    for outcome in &report.outcomes {
        let row = outcome.row().to_string();

        match outcome {
            RowOutcome::Evaluated { result, .. } => {
                output.write_record([
                    row.as_str(),
                    result.record.transaction_type().as_str(),
                    result.record.amount().to_string().as_str(),
                    result.label.as_u8().to_string().as_str(),
                    result.label.verdict(),
                    result.summary().as_str()
                ])?;
            },
            RowOutcome::Rejected { reason, .. } => {
                output.write_record([row.as_str(), "", "", "", "INVALID", reason.as_str()])?;
            },
            RowOutcome::Failed { reason, .. } => {
                output.write_record([row.as_str(), "", "", "", "FAILED", reason.as_str()])?;
            }
        }
    }

    output.flush()?;

    Ok(())
}
