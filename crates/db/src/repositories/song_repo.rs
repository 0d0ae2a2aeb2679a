//! Repository for the `music_data` table.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::song::{NewSong, RatingUpdate, Song, SongListRow, SongSearchRow};

/// Full column list, shared by exact-match queries.
const COLUMNS: &str = "index_col, id, title, danceability, energy, mode, \
     accousticness, tempo, duration_ms, num_sections, num_segments, \
     star_rating, created_at, updated_at";

/// Column subset returned by paginated title search.
const SEARCH_COLUMNS: &str =
    "id, title, star_rating, danceability, energy, mode, accousticness, tempo, duration_ms";

/// Rows per INSERT statement. Ten binds per row keeps the bind count
/// well under the Postgres 65535-parameter cap.
const INSERT_CHUNK_ROWS: usize = 1000;

/// Read, search, rating-update, and bulk-insert operations for songs.
///
/// Title matching is case-insensitive throughout. Not-found is a normal
/// `None`/empty result; only connection or query failures surface as
/// `sqlx::Error`. Each method borrows one pool connection for exactly
/// the duration of its statement.
pub struct SongRepo;

impl SongRepo {
    /// Case-insensitive existence probe by exact title.
    pub async fn exists(pool: &PgPool, title: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i32,)> =
            sqlx::query_as("SELECT 1 FROM music_data WHERE LOWER(title) = LOWER($1) LIMIT 1")
                .bind(title)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }

    /// Find a song by exact title (case-insensitive), all columns.
    ///
    /// When several songs share the title, the first row wins, matching
    /// the single-row lookup contract of the exact-match endpoint.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM music_data WHERE LOWER(title) = LOWER($1)");
        sqlx::query_as::<_, Song>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Set `star_rating` and refresh `updated_at` in a single statement.
    ///
    /// Returns `None` if no row matched the title.
    pub async fn update_rating(
        pool: &PgPool,
        title: &str,
        rating: f64,
    ) -> Result<Option<RatingUpdate>, sqlx::Error> {
        sqlx::query_as::<_, RatingUpdate>(
            "UPDATE music_data \
             SET star_rating = $1, updated_at = now() \
             WHERE LOWER(title) = LOWER($2) \
             RETURNING id, title, star_rating",
        )
        .bind(rating)
        .bind(title)
        .fetch_optional(pool)
        .await
    }

    /// One page of the full catalog, ordered by title.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SongListRow>, sqlx::Error> {
        sqlx::query_as::<_, SongListRow>(
            "SELECT title, id, star_rating, danceability, energy, mode \
             FROM music_data \
             ORDER BY title, index_col \
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// One page of case-insensitive substring matches.
    ///
    /// Exact title matches rank before other substring matches; within a
    /// rank group rows are ordered by title, then `index_col`, so equal
    /// titles paginate deterministically.
    pub async fn search_page(
        pool: &PgPool,
        term: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SongSearchRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SEARCH_COLUMNS} FROM music_data \
             WHERE LOWER(title) LIKE LOWER($1) \
             ORDER BY \
                 CASE WHEN LOWER(title) = LOWER($2) THEN 0 ELSE 1 END, \
                 title, index_col \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, SongSearchRow>(&query)
            .bind(format!("%{term}%"))
            .bind(term)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count of case-insensitive substring matches.
    ///
    /// Executed independently of [`Self::search_page`]; the two are not
    /// a consistent snapshot under concurrent writes.
    pub async fn count_matching(pool: &PgPool, term: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM music_data WHERE LOWER(title) LIKE LOWER($1)")
                .bind(format!("%{term}%"))
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Insert songs in batched multi-row statements, silently skipping
    /// ids that already exist (`ON CONFLICT DO NOTHING`).
    ///
    /// Returns the number of rows actually inserted; re-running the same
    /// batch is a no-op.
    pub async fn bulk_insert(pool: &PgPool, songs: &[NewSong]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for chunk in songs.chunks(INSERT_CHUNK_ROWS) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO music_data \
                 (id, title, danceability, energy, mode, accousticness, \
                  tempo, duration_ms, num_sections, num_segments) ",
            );
            builder.push_values(chunk, |mut b, song| {
                b.push_bind(&song.id)
                    .push_bind(&song.title)
                    .push_bind(song.danceability)
                    .push_bind(song.energy)
                    .push_bind(song.mode)
                    .push_bind(song.accousticness)
                    .push_bind(song.tempo)
                    .push_bind(song.duration_ms)
                    .push_bind(song.num_sections)
                    .push_bind(song.num_segments);
            });
            builder.push(" ON CONFLICT (id) DO NOTHING");

            let result = builder.build().execute(pool).await?;
            inserted += result.rows_affected();
        }

        tracing::debug!(
            total = songs.len(),
            inserted,
            "Bulk insert finished"
        );
        Ok(inserted)
    }
}
