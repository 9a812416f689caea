//! Usage: paddlex import <FILE> [--db PATH]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use paddlex_core::errors::{ExErrorKind, PaddleXError};
use paddlex_core::model::{Paddle, PaddleSubmission};
use paddlex_store::PaddleStore;
use serde_json::{Map, Value};

use super::DbArgs;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file holding an array of paddle records
    pub file: PathBuf,

    #[command(flatten)]
    pub db: DbArgs,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub created: usize,
    pub skipped: usize,
    pub invalid: usize,
}

pub fn execute(args: ImportArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let records: Vec<Value> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array", args.file.display()))?;

    let store = args.db.open()?;
    println!("Found {} paddles to import", records.len());

    let report = import_records(&store, records)?;
    println!(
        "{} created, {} skipped, {} invalid",
        report.created, report.skipped, report.invalid
    );

    if report.invalid > 0 {
        bail!("{} invalid record(s)", report.invalid);
    }
    Ok(())
}

/// Create each record, continuing past duplicates and invalid records.
/// Any other storage failure stops the import.
pub fn import_records(store: &PaddleStore, records: Vec<Value>) -> anyhow::Result<ImportReport> {
    let mut report = ImportReport::default();

    for (index, record) in records.into_iter().enumerate() {
        let position = index + 1;

        let paddle = match to_paddle(record) {
            Ok(paddle) => paddle,
            Err(reason) => {
                println!("invalid   record {position}: {reason}");
                report.invalid += 1;
                continue;
            }
        };

        match store.create(&paddle) {
            Ok(db_id) => {
                println!("created   {} (id {db_id})", paddle.id);
                report.created += 1;
            }
            Err(e) if e.kind() == ExErrorKind::AlreadyExists => {
                println!("skipped   {} (already exists)", paddle.id);
                report.skipped += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to store record {position}"));
            }
        }
    }

    Ok(report)
}

fn to_paddle(record: Value) -> paddlex_core::Result<Paddle> {
    to_submission(record)?.into_paddle()
}

/// Keep only the submission sections; a record's own `id` is ignored
fn to_submission(record: Value) -> paddlex_core::Result<PaddleSubmission> {
    let Value::Object(mut fields) = record else {
        return Err(PaddleXError::Serialization {
            message: "record is not a JSON object".to_string(),
        });
    };

    let mut input = Map::new();
    for section in ["metadata", "specs", "performance"] {
        let value = fields
            .remove(section)
            .unwrap_or_else(|| Value::Object(Map::new()));
        input.insert(section.to_string(), value);
    }

    serde_json::from_value(Value::Object(input)).map_err(|e| PaddleXError::Serialization {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(brand: &str, model: &str) -> Value {
        json!({
            "id": "ignored-id",
            "metadata": {"brand": brand, "model": model},
            "specs": {
                "shape": "Elongated", "surface": "Carbon Fiber", "average_weight": 8.1,
                "core": 16.0, "paddle_length": 16.5, "paddle_width": 7.5,
                "grip_length": 5.5, "grip_type": "Cushion", "grip_circumference": 4.25
            },
            "performance": {
                "power": 60.0, "pop": 55.0, "spin": 2000.0,
                "twist_weight": 6.5, "swing_weight": 115.0, "balance_point": 23.5
            }
        })
    }

    #[test]
    fn test_record_id_is_ignored() {
        let submission = to_submission(record("Gearbox", "Pro Power")).unwrap();
        assert_eq!(submission.metadata.brand, "Gearbox");
    }

    #[test]
    fn test_non_object_record_is_invalid() {
        let err = to_submission(json!(42)).unwrap_err();
        assert!(matches!(err, PaddleXError::Serialization { .. }));
        assert_eq!(err.to_string(), "Serialization error: record is not a JSON object");
    }

    #[test]
    fn test_mistyped_field_is_serialization_error() {
        let mut bad = record("Gearbox", "Pro Power");
        bad["specs"]["core"] = json!("sixteen");

        let err = to_paddle(bad).unwrap_err();
        assert!(matches!(err, PaddleXError::Serialization { .. }));
    }

    #[test]
    fn test_out_of_range_field_is_validation_error() {
        let mut bad = record("Gearbox", "Pro Power");
        bad["performance"]["pop"] = json!(120.0);

        let err = to_paddle(bad).unwrap_err();
        assert!(matches!(err, PaddleXError::Validation { .. }));
    }

    #[test]
    fn test_report_counts() {
        let store = PaddleStore::open_in_memory().unwrap();
        let mut bad = record("Gearbox", "Broken");
        bad["performance"]["pop"] = json!(120.0);

        let report = import_records(
            &store,
            vec![
                record("Gearbox", "Pro Power"),
                record("Gearbox", "Pro Power"),
                bad,
                record("CRBN", "1X Power Series"),
            ],
        )
        .unwrap();

        assert_eq!(
            report,
            ImportReport {
                created: 2,
                skipped: 1,
                invalid: 1
            }
        );
        assert_eq!(store.count().unwrap(), 2);
    }
}
