//! Songdex API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! service layer) so integration tests and the binary entrypoint share
//! one stack.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
