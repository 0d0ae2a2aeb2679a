//! Route tree assembly.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /song/{title}          GET   exact lookup, or paginated search when
///                              ?page= or ?limit= is present
/// /song/{title}/rate     POST  update star rating
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/song/{title}", get(handlers::songs::get_song))
        .route("/song/{title}/rate", post(handlers::songs::rate_song))
}
