use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the pool is internally reference-counted and the
/// config sits behind an `Arc`. The pool is the only shared mutable
/// resource between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: songdex_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
