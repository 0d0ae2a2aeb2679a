//! Record normalization: untyped JSON objects into validated [`NewSong`]s.
//!
//! Fields are extracted by exact key name. The wire format spells
//! `acousticness` while the table column is `accousticness`; the
//! mismatch comes from the upstream data export and is deliberately
//! preserved rather than corrected.

use serde_json::{Map, Value};
use songdex_db::models::song::NewSong;

use crate::error::IngestError;

/// Normalize a batch of raw records, preserving input order.
///
/// Fails fast on the first missing or ill-typed field; no partial batch
/// is ever produced.
pub fn normalize_records(records: &[Value]) -> Result<Vec<NewSong>, IngestError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(index, record))
        .collect()
}

fn normalize_record(index: usize, record: &Value) -> Result<NewSong, IngestError> {
    let obj = record
        .as_object()
        .ok_or(IngestError::NotAnObject { index })?;

    Ok(NewSong {
        id: string_field(obj, index, "id")?,
        title: string_field(obj, index, "title")?,
        danceability: float_field(obj, index, "danceability")?,
        energy: float_field(obj, index, "energy")?,
        mode: int_field(obj, index, "mode")?,
        // wire name differs from the internal attribute
        accousticness: float_field(obj, index, "acousticness")?,
        tempo: float_field(obj, index, "tempo")?,
        duration_ms: int_field(obj, index, "duration_ms")?,
        num_sections: int_field(obj, index, "num_sections")?,
        num_segments: int_field(obj, index, "num_segments")?,
    })
}

fn get<'a>(
    obj: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, IngestError> {
    obj.get(field)
        .ok_or(IngestError::MissingField { index, field })
}

fn string_field(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, IngestError> {
    match get(obj, index, field)? {
        Value::String(s) => Ok(s.clone()),
        // Some exports write numeric ids; render them as strings.
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(IngestError::InvalidField { index, field }),
    }
}

fn float_field(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<f64, IngestError> {
    get(obj, index, field)?
        .as_f64()
        .ok_or(IngestError::InvalidField { index, field })
}

fn int_field(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<i32, IngestError> {
    get(obj, index, field)?
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(IngestError::InvalidField { index, field })
}
