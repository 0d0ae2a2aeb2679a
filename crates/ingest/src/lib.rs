//! Bulk ingestion for the songdex catalog.
//!
//! Reads a JSON array of track objects, normalizes every record into a
//! typed [`songdex_db::models::song::NewSong`], and hands the whole
//! batch to the repository's idempotent bulk insert. A single missing or
//! ill-typed field aborts the batch before anything is written; there is
//! no partial success.

pub mod error;
pub mod normalize;
pub mod reader;
