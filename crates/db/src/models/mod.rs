//! Typed row shapes for every query the repository layer runs.
//!
//! Each query shape gets a named projection struct instead of a
//! positional tuple, so column reordering is caught at decode time.

pub mod song;
