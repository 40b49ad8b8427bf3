//! Dataset loader for CSV, JSON and Parquet files
//!
//! Every value is kept as text: typing happens later in the type converter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use serde_json::Value as JsonValue;

use super::record::RawRecord;

/// Load raw rows from a single file (CSV, JSON or Parquet based on extension)
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let records = match extension.as_str() {
        "csv" => {
            // A zero-length inference window reads every column as text
            let df = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(0))
                .finish()
                .and_then(|lf| lf.collect())
                .with_context(|| format!("Failed to load CSV file: {}", path.display()))?;
            frame_to_records(&df)
                .with_context(|| format!("Failed to read rows from {}", path.display()))?
        }
        "parquet" => {
            let df = LazyFrame::scan_parquet(path, Default::default())
                .and_then(|lf| lf.collect())
                .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?;
            frame_to_records(&df)
                .with_context(|| format!("Failed to read rows from {}", path.display()))?
        }
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
            json_to_records(&text)
                .with_context(|| format!("Failed to load JSON file: {}", path.display()))?
        }
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, json, parquet",
            extension
        ),
    };

    log::info!("Loaded {} row(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Load several files and concatenate their rows in input order
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(load_records(path)?);
    }
    Ok(records)
}

/// Turn every column of a DataFrame into text and split it into rows.
/// Nulls become the empty string.
fn frame_to_records(df: &DataFrame) -> Result<Vec<RawRecord>> {
    let mut records = vec![RawRecord::new(); df.height()];

    for name in df.get_column_names() {
        let column = df.column(name.as_str())?.cast(&DataType::String)?;
        let values = column.str()?;
        for (record, value) in records.iter_mut().zip(values.into_iter()) {
            record.insert(name.as_str(), value.unwrap_or(""));
        }
    }

    Ok(records)
}

/// Parse a top-level JSON array of objects into rows.
///
/// Strings are taken as-is, `null` becomes the empty string and any other value
/// is kept as its JSON text.
pub fn json_to_records(text: &str) -> Result<Vec<RawRecord>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| -> Result<RawRecord> {
            let obj = row
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            Ok(obj
                .iter()
                .map(|(key, value)| (key.clone(), json_to_text(value)))
                .collect())
        })
        .collect()
}

fn json_to_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_values_become_text() {
        let records = json_to_records(
            r#"[{"title": "Up", "budget": 175000000, "video": false, "tagline": null,
                 "genres": [{"name": "Animation"}]}]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let row = &records[0];
        assert_eq!(row.get("title"), "Up");
        assert_eq!(row.get("budget"), "175000000");
        assert_eq!(row.get("video"), "false");
        assert_eq!(row.get("tagline"), "");
        assert_eq!(row.get("genres"), r#"[{"name":"Animation"}]"#);
    }

    #[test]
    fn test_json_must_be_array_of_objects() {
        assert!(json_to_records(r#"{"title": "Up"}"#).is_err());
        assert!(json_to_records(r#"[1, 2]"#).is_err());
        assert!(json_to_records("[").is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_records(Path::new("movies.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }
}
