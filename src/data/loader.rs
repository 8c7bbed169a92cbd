use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray, Float64Array};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{AisleDataset, AisleMetric};

pub const AISLE: &str = "aisle";
pub const REORDER_PROBABILITY: &str = "reorder_probability";
pub const TOTAL_PURCHASES: &str = "total_purchases";
pub const TOTAL_REORDERS: &str = "total_reorders";

/// Columns every source must carry, by exact name.
pub const REQUIRED_COLUMNS: [&str; 4] = [AISLE, REORDER_PROBABILITY, TOTAL_PURCHASES, TOTAL_REORDERS];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("column conversion failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("not tabular data: {0}")]
    NotTabular(String),
}

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and clean an aisle metrics table.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the columns
/// * `.json`    – `[{ "aisle": ..., "reorder_probability": ..., ... }, ...]`
/// * `.parquet` – flat columns of any numeric or string type
///
/// Numeric cells that fail coercion become missing; rows missing
/// `reorder_probability` or `total_purchases` are dropped without error.
pub fn load_file(path: &Path) -> Result<AisleDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows = match ext.as_str() {
        "csv" => read_csv(path)?,
        "json" => read_json(path)?,
        "parquet" | "pq" => read_parquet(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    let dataset = clean(rows);
    log::debug!(
        "{}: dropped {} of {} rows with non-numeric probability or purchases",
        path.display(),
        dataset.rows_dropped(),
        dataset.rows_read
    );
    Ok(dataset)
}

/// Pandas-style `to_numeric(errors="coerce")`: anything unparsable is missing.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (!value.is_nan()).then_some(value)
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

/// A source row after coercion, before the missing-value filter.
#[derive(Debug, Clone, PartialEq)]
struct RawRow {
    aisle: String,
    reorder_probability: Option<f64>,
    total_purchases: Option<f64>,
    total_reorders: Option<f64>,
}

impl RawRow {
    fn into_metric(self) -> Option<AisleMetric> {
        Some(AisleMetric {
            aisle: self.aisle,
            reorder_probability: self.reorder_probability?,
            total_purchases: self.total_purchases?,
            total_reorders: self.total_reorders,
        })
    }
}

fn clean(rows: Vec<RawRow>) -> AisleDataset {
    let rows_read = rows.len();
    let records = rows.into_iter().filter_map(RawRow::into_metric).collect();
    AisleDataset::new(records, rows_read)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Columns are located by header name; extra columns are ignored and short
/// rows leave the trailing fields missing. A row longer than the header is
/// rejected.
fn read_csv(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let position = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let aisle_idx = position(AISLE)?;
    let rp_idx = position(REORDER_PROBABILITY)?;
    let purchases_idx = position(TOTAL_PURCHASES)?;
    let reorders_idx = position(TOTAL_REORDERS)?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(LoadError::NotTabular(format!(
                "CSV row {row_no} has {} fields but the header has {}",
                record.len(),
                headers.len()
            )));
        }
        let numeric = |idx: usize| record.get(idx).and_then(coerce_numeric);
        rows.push(RawRow {
            aisle: record.get(aisle_idx).unwrap_or("").to_string(),
            reorder_probability: numeric(rp_idx),
            total_purchases: numeric(purchases_idx),
            total_reorders: numeric(reorders_idx),
        });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "aisle": "fresh fruits", "reorder_probability": 0.72,
///     "total_purchases": 3792661, "total_reorders": 2726251 },
///   ...
/// ]
/// ```
///
/// A required column must appear in at least one record.
fn read_json(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root
        .as_array()
        .ok_or_else(|| LoadError::NotTabular("expected a top-level JSON array".into()))?;

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::NotTabular(format!("row {i} is not a JSON object")))?;
        seen.extend(obj.keys().map(String::as_str));

        let numeric = |key: &str| obj.get(key).and_then(json_to_f64);
        rows.push(RawRow {
            aisle: obj.get(AISLE).map(json_to_label).unwrap_or_default(),
            reorder_probability: numeric(REORDER_PROBABILITY),
            total_purchases: numeric(TOTAL_PURCHASES),
            total_reorders: numeric(TOTAL_REORDERS),
        });
    }

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !seen.contains(**c)) {
        return Err(LoadError::MissingColumn(*missing));
    }
    Ok(rows)
}

fn json_to_f64(val: &JsonValue) -> Option<f64> {
    match val {
        JsonValue::Number(n) => n.as_f64().filter(|v| !v.is_nan()),
        JsonValue::String(s) => coerce_numeric(s),
        _ => None,
    }
}

fn json_to_label(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both Pandas (`df.to_parquet()`) and Polars.
/// Numeric columns are cast to Float64 with null-on-failure, which is the
/// same coercion the text formats get.
fn read_parquet(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let schema = builder.schema().clone();
    for name in REQUIRED_COLUMNS {
        if schema.index_of(name).is_err() {
            return Err(LoadError::MissingColumn(name));
        }
    }

    let reader = builder.build()?;
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let column = |name: &'static str| {
            batch
                .column_by_name(name)
                .cloned()
                .ok_or(LoadError::MissingColumn(name))
        };

        let aisle = cast(&column(AISLE)?, &DataType::Utf8)?;
        let rp = to_f64(&column(REORDER_PROBABILITY)?)?;
        let purchases = to_f64(&column(TOTAL_PURCHASES)?)?;
        let reorders = to_f64(&column(TOTAL_REORDERS)?)?;

        let aisle = aisle.as_string::<i32>();
        let rp = rp.as_primitive::<Float64Type>();
        let purchases = purchases.as_primitive::<Float64Type>();
        let reorders = reorders.as_primitive::<Float64Type>();

        for row in 0..batch.num_rows() {
            let label = if aisle.is_null(row) {
                String::new()
            } else {
                aisle.value(row).to_string()
            };
            rows.push(RawRow {
                aisle: label,
                reorder_probability: cell(rp, row),
                total_purchases: cell(purchases, row),
                total_reorders: cell(reorders, row),
            });
        }
    }
    Ok(rows)
}

fn cell(arr: &Float64Array, row: usize) -> Option<f64> {
    if arr.is_null(row) {
        return None;
    }
    Some(arr.value(row)).filter(|v| !v.is_nan())
}

fn to_f64(col: &ArrayRef) -> Result<ArrayRef, LoadError> {
    Ok(cast(col, &DataType::Float64)?)
}
