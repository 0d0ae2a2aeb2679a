//! Database access layer for the songdex catalog.
//!
//! Pool construction is explicit: [`DbConfig`] is read from the
//! environment at startup, [`create_pool`] builds the bounded pool, and
//! the pool is passed down to every repository call. There is no global
//! registry of connections.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Connection settings loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in production.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database host (default: `localhost`).
    pub host: String,
    /// Database port (default: `5432`).
    pub port: u16,
    /// Database name (default: `postgres`).
    pub database: String,
    /// Database user (default: `postgres`).
    pub user: String,
    /// Database password (default: empty).
    pub password: String,
    /// Minimum pool size (default: `1`).
    pub pool_min: u32,
    /// Maximum pool size (default: `10`).
    pub pool_max: u32,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var       | Default     |
    /// |---------------|-------------|
    /// | `DB_HOST`     | `localhost` |
    /// | `DB_PORT`     | `5432`      |
    /// | `DB_NAME`     | `postgres`  |
    /// | `DB_USER`     | `postgres`  |
    /// | `DB_PASSWORD` | (empty)     |
    /// | `DB_POOL_MIN` | `1`         |
    /// | `DB_POOL_MAX` | `10`        |
    pub fn from_env() -> Self {
        let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());

        let port: u16 = std::env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");

        let database = std::env::var("DB_NAME").unwrap_or_else(|_| "postgres".into());
        let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into());
        let password = std::env::var("DB_PASSWORD").unwrap_or_default();

        let pool_min: u32 = std::env::var("DB_POOL_MIN")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .expect("DB_POOL_MIN must be a valid u32");

        let pool_max: u32 = std::env::var("DB_POOL_MAX")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_POOL_MAX must be a valid u32");

        Self {
            host,
            port,
            database,
            user,
            password,
            pool_min,
            pool_max,
        }
    }

    /// Render the config as a Postgres connection URL.
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// Create a bounded connection pool from the given configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.pool_min)
        .max_connections(config.pool_max)
        .connect(&config.connection_url())
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `music_data` table and its title index if they do not
/// already exist.
///
/// Used by the ingest binary so a fresh database can be loaded without a
/// separate migration step. Mirrors `migrations/0001_create_music_data.sql`.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    const SCHEMA_SQL: &str = "\
        CREATE TABLE IF NOT EXISTS music_data (\
            index_col BIGSERIAL UNIQUE,\
            id VARCHAR(255) PRIMARY KEY,\
            title VARCHAR(255) NOT NULL,\
            danceability DOUBLE PRECISION,\
            energy DOUBLE PRECISION,\
            mode INT,\
            accousticness DOUBLE PRECISION,\
            tempo DOUBLE PRECISION,\
            duration_ms INT,\
            num_sections INT,\
            num_segments INT,\
            star_rating DOUBLE PRECISION,\
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),\
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()\
        );\
        CREATE INDEX IF NOT EXISTS idx_music_data_title ON music_data (title);";

    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    tracing::debug!("music_data schema ensured");
    Ok(())
}
