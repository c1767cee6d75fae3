use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeListArray, ListArray};
use arrow::datatypes::DataType;
use log::debug;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::bunch::Bunch;

/// Column holding the class of each row (CSV and Parquet).
pub const TARGET_COLUMN: &str = "target";
/// Parquet list column holding the feature row.
pub const DATA_COLUMN: &str = "data";
/// Parquet metadata key with a JSON array of feature names.
pub const FEATURE_NAMES_KEY: &str = "feature_names";
/// Parquet metadata key with a JSON array of class names.
pub const TARGET_NAMES_KEY: &str = "target_names";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a bunch from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `{ "data": [[...]], "target": [...], "feature_names"?, "target_names"? }`
/// * `.csv`     – one feature per column plus a `target` column (or the last one)
/// * `.parquet` – `data` list column and `target` integer column, names in
///   the file's key/value metadata
pub fn load_file(path: &Path) -> Result<Bunch> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let bunch = match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    debug!(
        "Loaded bunch with {} rows from {}",
        bunch.len(),
        path.display()
    );
    Ok(bunch)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (a `Bunch` dumped field by field):
///
/// ```json
/// {
///   "data": [[5.1, 3.5, 1.4, 0.2], ...],
///   "target": [0, ...],
///   "feature_names": ["sepal length (cm)", ...],
///   "target_names": ["setosa", "versicolor", "virginica"]
/// }
/// ```
fn load_json(path: &Path) -> Result<Bunch> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let bunch: Bunch = serde_json::from_str(&text).context("parsing JSON bunch")?;
    Ok(bunch)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.
/// The `target` column (or the last column if there is none) holds the
/// class; every other column is a numeric feature named by its header.
///
/// Integer targets are used as class indices directly. Any other label is
/// mapped to an index in first-seen order and kept as a target name.
fn load_csv(path: &Path) -> Result<Bunch> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < 2 {
        bail!("CSV needs at least one feature column and a target column");
    }
    let target_idx = headers
        .iter()
        .position(|h| h == TARGET_COLUMN)
        .unwrap_or(headers.len() - 1);

    let feature_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let mut data = Vec::new();
    let mut labels = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let label = record
            .get(target_idx)
            .with_context(|| format!("CSV row {row_no}: missing target"))?;
        labels.push(label.trim().to_string());

        let row = record
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != target_idx)
            .map(|(i, value)| {
                value.trim().parse::<f64>().with_context(|| {
                    format!(
                        "Row {row_no}, {}: '{value}' is not a number",
                        headers[i]
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        data.push(row);
    }

    let (target, target_names) = encode_labels(labels);

    Ok(Bunch {
        data,
        target,
        feature_names: Some(feature_names),
        target_names,
    })
}

/// Integer labels pass through untouched; otherwise labels are numbered in
/// first-seen order and returned as target names.
fn encode_labels(labels: Vec<String>) -> (Vec<i64>, Option<Vec<String>>) {
    let parsed: Option<Vec<i64>> = labels.iter().map(|l| l.parse::<i64>().ok()).collect();
    if let Some(target) = parsed {
        return (target, None);
    }

    let mut names: Vec<String> = Vec::new();
    let mut lookup: HashMap<String, i64> = HashMap::new();
    let target = labels
        .into_iter()
        .map(|label| {
            *lookup.entry(label.clone()).or_insert_with(|| {
                names.push(label);
                names.len() as i64 - 1
            })
        })
        .collect();
    (target, Some(names))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing a bunch.
///
/// Expected schema:
/// - `data`: List<Float64|Float32> or LargeList – one feature row per record
/// - `target`: Int32 or Int64 – class index
/// - key/value metadata `feature_names` / `target_names`: JSON string arrays
fn load_parquet(path: &Path) -> Result<Bunch> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;

    let metadata = builder.schema().metadata().clone();
    let feature_names = names_from_metadata(&metadata, FEATURE_NAMES_KEY)?;
    let target_names = names_from_metadata(&metadata, TARGET_NAMES_KEY)?;

    let reader = builder.build().context("building parquet reader")?;

    let mut data = Vec::new();
    let mut target = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let data_idx = schema
            .index_of(DATA_COLUMN)
            .map_err(|_| anyhow::anyhow!("Parquet file missing '{DATA_COLUMN}' column"))?;
        let target_idx = schema
            .index_of(TARGET_COLUMN)
            .map_err(|_| anyhow::anyhow!("Parquet file missing '{TARGET_COLUMN}' column"))?;

        let data_col = batch.column(data_idx);
        let target_col = batch.column(target_idx);
        let offset = target.len();

        for row in 0..batch.num_rows() {
            data.push(
                extract_f64_list(data_col, row)
                    .with_context(|| format!("Row {}: failed to read '{DATA_COLUMN}'", offset + row))?,
            );
            target.push(
                extract_i64(target_col, row)
                    .with_context(|| format!("Row {}: failed to read '{TARGET_COLUMN}'", offset + row))?,
            );
        }
    }

    Ok(Bunch {
        data,
        target,
        feature_names,
        target_names,
    })
}

// -- Parquet / Arrow helpers --

fn names_from_metadata(metadata: &HashMap<String, String>, key: &str) -> Result<Option<Vec<String>>> {
    metadata
        .get(key)
        .map(|raw| {
            serde_json::from_str::<Vec<String>>(raw)
                .with_context(|| format!("metadata '{key}' is not a JSON string array"))
        })
        .transpose()
}

/// Extract a `Vec<f64>` from a List or LargeList column at the given row.
fn extract_f64_list(col: &Arc<dyn Array>, row: usize) -> Result<Vec<f64>> {
    if col.is_null(row) {
        bail!("null value in list column");
    }

    let values_array = match col.data_type() {
        DataType::List(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<ListArray>()
                .context("expected ListArray")?;
            list_arr.value(row)
        }
        DataType::LargeList(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<LargeListArray>()
                .context("expected LargeListArray")?;
            list_arr.value(row)
        }
        other => bail!("Expected List or LargeList column, got {other:?}"),
    };

    // The inner array can be Float64 or Float32
    if let Some(f64_arr) = values_array.as_any().downcast_ref::<Float64Array>() {
        Ok(f64_arr.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    } else if let Some(f32_arr) = values_array.as_any().downcast_ref::<Float32Array>() {
        Ok(f32_arr.iter().map(|v| v.unwrap_or(f32::NAN) as f64).collect())
    } else {
        bail!(
            "List inner type is {:?}, expected Float64 or Float32",
            values_array.data_type()
        )
    }
}

/// Extract a class index from an Int32 / Int64 column at the given row.
fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null class index");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(i64::from(arr.value(row)))
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        other => bail!("Expected Int32 or Int64 target column, got {other:?}"),
    }
}
