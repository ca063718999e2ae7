//! JSON lookup-table ingestion.
//!
//! Expected input is a single JSON object whose entries map raw codes to
//! canonical names: `{"A": "Apple", "B": "Banana"}`.

use std::fs;
use std::path::Path;

use crate::error::{ReconcileError, ReconcileResult};
use crate::lookup::LookupTable;

/// Read a lookup table from a JSON file.
pub fn read_lookup_from_path(path: impl AsRef<Path>) -> ReconcileResult<LookupTable> {
    let text = fs::read_to_string(path)?;
    read_lookup_from_str(&text)
}

/// Read a lookup table from an in-memory JSON string.
pub fn read_lookup_from_str(input: &str) -> ReconcileResult<LookupTable> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    let obj = value
        .as_object()
        .ok_or_else(|| ReconcileError::MalformedInput {
            message: "lookup json must be an object of code -> name entries".to_string(),
        })?;

    let mut table = LookupTable::new();
    for (code, name) in obj {
        let name = name.as_str().ok_or_else(|| ReconcileError::MalformedInput {
            message: format!("lookup entry '{code}' is not a string"),
        })?;
        table.insert(code, name);
    }
    Ok(table)
}
