/// Errors raised while reading or normalizing an ingestion batch.
///
/// All variants abort the whole batch; ingestion never partially
/// succeeds. These errors surface to the ingest caller only, never to
/// the HTTP API.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} must contain a JSON array of track objects")]
    NotAnArray { path: String },

    #[error("Record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("Record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Record {index} field '{field}' has an invalid type")]
    InvalidField { index: usize, field: &'static str },
}
