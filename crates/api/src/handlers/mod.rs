//! HTTP handlers. Thin wrappers that map service outcomes onto the
//! response envelopes; all business validation lives in the service and
//! core layers.

pub mod songs;
