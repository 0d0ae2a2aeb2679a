//! Pure domain logic for the songdex catalog.
//!
//! This crate has zero I/O dependencies (no DB, no async, no HTTP) so the
//! API service layer, the repository layer, and the ingestion tooling all
//! share one set of validation and pagination rules.

pub mod catalog;
pub mod error;
pub mod types;
