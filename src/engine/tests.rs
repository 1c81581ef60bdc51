use super::{BatchEngine, RowOutcome};

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::classifier::{Classifier, ClassifierError, FeatureTable, FeatureValue};
use crate::models::Label;
use crate::service::PredictionService;

const HEADER: &str = "type,amount,oldbalanceOrg,newbalanceOrig,oldbalanceDest,newbalanceDest";

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{HEADER}")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

fn sample_service() -> Arc<PredictionService> {
    Arc::new(PredictionService::initialize("samples/model.json"))
}

/// Flags every transfer, rejects every cash-out, lets everything else through.
struct TransferFlagger;

impl Classifier for TransferFlagger {
    fn name(&self) -> &str {
        "transfer-flagger"
    }

    fn version(&self) -> &str {
        "0"
    }

    fn predict(&self, table: &FeatureTable) -> Result<Vec<u8>, ClassifierError> {
        match table.rows.first().and_then(|row| row.first()) {
            Some(FeatureValue::Text(value)) if value == "CASH_OUT" => {
                Err(ClassifierError::UnknownCategory { column: "type".to_string(), value: value.clone() })
            },
            Some(FeatureValue::Text(value)) => Ok(vec![u8::from(value == "TRANSFER")]),
            _ => Ok(vec![0])
        }
    }
}

#[tokio::test]
async fn test_engine_evaluates_rows_in_input_order() -> Result<()> {
    let file = create_temporary_csv(&[
        "PAYMENT,100.0,1000.0,900.0,0.0,0.0",
        "TRANSFER,181000.0,181000.0,0.0,0.0,0.0",
        "CASH_OUT,5000.0,10000.0,5000.0,2000.0,7000.0"
    ])?;

    let engine = BatchEngine::new(sample_service());
    let report = engine.run(file.path().to_str().unwrap()).await?;

    let labels: Vec<(u64, Label)> = report.outcomes.iter().map(|outcome| match outcome {
        RowOutcome::Evaluated { row, result } => (*row, result.label),
        other => panic!("unexpected outcome {other:?}")
    }).collect();

    assert_eq!(labels, vec![(1, Label::Legitimate), (2, Label::Fraudulent), (3, Label::Legitimate)]);
    assert_eq!(report.evaluated(), 3);
    assert_eq!(report.fraudulent(), 1);

    Ok(())
}

#[tokio::test]
async fn test_engine_rejects_invalid_rows_and_continues() -> Result<()> {
    let file = create_temporary_csv(&[
        "WIRE,100.0,1000.0,900.0,0.0,0.0",
        "PAYMENT,-5.0,1000.0,900.0,0.0,0.0",
        "DEBIT,abc,10.0,0.0,0.0,0.0",
        "PAYMENT,100.0,1000.0,900.0,0.0,0.0"
    ])?;

    let engine = BatchEngine::new(sample_service());
    let report = engine.run(file.path().to_str().unwrap()).await?;

    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.rejected(), 3);
    assert_eq!(report.evaluated(), 1);
    assert!(matches!(&report.outcomes[0], RowOutcome::Rejected { row: 1, reason } if reason.contains("WIRE")));
    assert!(matches!(&report.outcomes[1], RowOutcome::Rejected { row: 2, reason } if reason.contains("amount")));
    assert!(matches!(&report.outcomes[2], RowOutcome::Rejected { row: 3, .. }));
    assert_eq!(report.outcomes[3].row(), 4);

    Ok(())
}

#[tokio::test]
async fn test_engine_records_classifier_failures_per_row() -> Result<()> {
    let file = create_temporary_csv(&[
        "TRANSFER,10.0,10.0,0.0,0.0,0.0",
        "CASH_OUT,10.0,10.0,0.0,0.0,0.0",
        "PAYMENT,10.0,10.0,0.0,0.0,0.0"
    ])?;

    let service = Arc::new(PredictionService::with_classifier(Arc::new(TransferFlagger)));
    let engine = BatchEngine::new(service).with_backpressure(1);
    let report = engine.run(file.path().to_str().unwrap()).await?;

    assert_eq!(report.fraudulent(), 1);
    assert_eq!(report.failed(), 1);
    assert!(matches!(&report.outcomes[1], RowOutcome::Failed { row: 2, .. }));
    assert!(matches!(&report.outcomes[2], RowOutcome::Evaluated { row: 3, result } if result.label == Label::Legitimate));

    Ok(())
}

#[tokio::test]
async fn test_engine_fails_on_missing_csv_file() {
    let engine = BatchEngine::new(sample_service());
    let error = engine.run("missing.csv").await.expect_err("missing file must fail");

    assert!(error.to_string().contains("Could not read input file"));
}

#[tokio::test]
async fn test_engine_refuses_to_run_without_a_model() -> Result<()> {
    let file = create_temporary_csv(&["PAYMENT,100.0,1000.0,900.0,0.0,0.0"])?;
    let service = Arc::new(PredictionService::initialize("missing-model.json"));
    let engine = BatchEngine::new(service);

    assert!(engine.run(file.path().to_str().unwrap()).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_engine_handles_header_only_file() -> Result<()> {
    let file = create_temporary_csv(&[])?;
    let engine = BatchEngine::new(sample_service());
    let report = engine.run(file.path().to_str().unwrap()).await?;

    assert!(report.outcomes.is_empty());

    Ok(())
}
