//! JSON file reading for ingestion input.

use serde_json::Value;

use crate::error::IngestError;

/// Read a JSON file containing an array of track objects.
///
/// The records are returned untyped; [`crate::normalize`] turns them
/// into validated entities.
pub fn read_records(path: &str) -> Result<Vec<Value>, IngestError> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_string(),
        source,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| IngestError::Json {
        path: path.to_string(),
        source,
    })?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(IngestError::NotAnArray {
            path: path.to_string(),
        }),
    }
}
