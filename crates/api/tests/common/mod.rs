use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use songdex_api::config::ServerConfig;
use songdex_api::router::build_app_router;
use songdex_api::state::AppState;
use songdex_db::models::song::NewSong;
use songdex_db::repositories::SongRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A `NewSong` with fixed audio features, matching the ingest scenario
/// used throughout the tests.
pub fn new_song(id: &str, title: &str) -> NewSong {
    NewSong {
        id: id.to_string(),
        title: title.to_string(),
        danceability: 0.5,
        energy: 0.5,
        mode: 1,
        accousticness: 0.1,
        tempo: 120.0,
        duration_ms: 200_000,
        num_sections: 5,
        num_segments: 50,
    }
}

/// Seed the given songs through the repository's bulk insert.
pub async fn seed(pool: &PgPool, songs: &[NewSong]) {
    SongRepo::bulk_insert(pool, songs)
        .await
        .expect("seeding should succeed");
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
