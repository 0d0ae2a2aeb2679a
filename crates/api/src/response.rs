//! Shared response envelope types for API handlers.
//!
//! Success payloads use `{ "success": true, "data": ... }`; misses use
//! `{ "success": false, "message": ... }`. Error envelopes (400/500)
//! live in [`crate::error`]. Use these structs instead of ad-hoc
//! `serde_json::json!` blocks to keep serialization consistent.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` success envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Rate-endpoint success envelope: data plus a confirmation message.
#[derive(Debug, Serialize)]
pub struct RatedResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

/// `{ "success": false, "message": ... }` miss envelope (404s).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
