//! `songdex-ingest` -- bulk catalog loader.
//!
//! Usage: `songdex-ingest <tracks.json>`
//!
//! Reads a JSON array of track objects, validates every record up front,
//! ensures the `music_data` schema exists, and performs one idempotent
//! bulk insert (ids already present are skipped, never overwritten).
//!
//! # Environment variables
//!
//! | Variable      | Required | Default     |
//! |---------------|----------|-------------|
//! | `DB_HOST`     | no       | `localhost` |
//! | `DB_PORT`     | no       | `5432`      |
//! | `DB_NAME`     | no       | `postgres`  |
//! | `DB_USER`     | no       | `postgres`  |
//! | `DB_PASSWORD` | no       | (empty)     |
//! | `DB_POOL_MIN` | no       | `1`         |
//! | `DB_POOL_MAX` | no       | `10`        |

use songdex_db::repositories::SongRepo;
use songdex_db::DbConfig;
use songdex_ingest::{normalize, reader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "songdex_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| {
        tracing::error!("Usage: songdex-ingest <tracks.json>");
        std::process::exit(1);
    });

    let records = reader::read_records(&path).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to read input file");
        std::process::exit(1);
    });
    tracing::info!(records = records.len(), path = %path, "Loaded input file");

    // Validate the whole batch before touching the database.
    let songs = normalize::normalize_records(&records).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Normalization failed; nothing was inserted");
        std::process::exit(1);
    });
    tracing::info!(songs = songs.len(), "Normalized all records");

    let config = DbConfig::from_env();
    let pool = songdex_db::create_pool(&config).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to connect to database");
        std::process::exit(1);
    });

    songdex_db::ensure_schema(&pool).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to ensure schema");
        std::process::exit(1);
    });

    let inserted = SongRepo::bulk_insert(&pool, &songs).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Bulk insert failed");
        std::process::exit(1);
    });

    tracing::info!(
        inserted,
        skipped = songs.len() as u64 - inserted,
        "Ingestion complete"
    );
}
