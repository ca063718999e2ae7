//! CSV dataset ingestion.

use std::path::Path;

use crate::error::{ReconcileError, ReconcileResult};
use crate::types::{Dataset, Record};

/// Names of the two columns to read from a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetColumns {
    /// Header of the platform-code column.
    pub platform: String,
    /// Header of the node-code column.
    pub node: String,
}

impl DatasetColumns {
    /// Columns named `platform` and `node`.
    pub fn canonical() -> Self {
        Self::new("platform", "node")
    }

    /// Create a column selection.
    pub fn new(platform: impl Into<String>, node: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            node: node.into(),
        }
    }
}

/// Read a CSV file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain both requested columns (order can differ; extra
///   columns are ignored).
/// - Cell values are trimmed and kept as raw strings.
pub fn read_dataset_from_path(
    path: impl AsRef<Path>,
    columns: &DatasetColumns,
) -> ReconcileResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_dataset_from_reader(&mut rdr, columns)
}

/// Read CSV data from an existing CSV reader.
pub fn read_dataset_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    columns: &DatasetColumns,
) -> ReconcileResult<Dataset> {
    let headers = rdr.headers()?.clone();

    let platform_idx = column_index(&headers, &columns.platform)?;
    let node_idx = column_index(&headers, &columns.node)?;

    let mut records: Vec<Record> = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let platform_code = row.get(platform_idx).unwrap_or("").trim();
        let node_code = row.get(node_idx).unwrap_or("").trim();
        records.push(Record::new(platform_code, node_code));
    }

    Ok(Dataset::new(records))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> ReconcileResult<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        ReconcileError::MalformedInput {
            message: format!(
                "missing required column '{name}'. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        }
    })
}
