//! Song entity model and query projections.

use serde::Serialize;
use songdex_core::types::Timestamp;
use sqlx::FromRow;

/// A full row from the `music_data` table.
///
/// Audio feature columns are nullable in the schema; the source data is
/// expected to populate them, but lookups must tolerate their absence.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Song {
    /// Internal ordering surrogate; never exposed to API callers.
    pub index_col: i64,
    pub id: String,
    pub title: String,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub mode: Option<i32>,
    pub accousticness: Option<f64>,
    pub tempo: Option<f64>,
    pub duration_ms: Option<i32>,
    pub num_sections: Option<i32>,
    pub num_segments: Option<i32>,
    pub star_rating: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection returned by [`crate::repositories::SongRepo::list_page`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SongListRow {
    pub title: String,
    pub id: String,
    pub star_rating: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub mode: Option<i32>,
}

/// Projection returned by [`crate::repositories::SongRepo::search_page`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SongSearchRow {
    pub id: String,
    pub title: String,
    pub star_rating: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub mode: Option<i32>,
    pub accousticness: Option<f64>,
    pub tempo: Option<f64>,
    pub duration_ms: Option<i32>,
}

/// The `(id, title, star_rating)` triple returned by a rating update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RatingUpdate {
    pub id: String,
    pub title: String,
    pub star_rating: Option<f64>,
}

/// A validated song ready for bulk insertion.
///
/// Ingested songs start unrated; `star_rating` is set only through the
/// rating endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSong {
    pub id: String,
    pub title: String,
    pub danceability: f64,
    pub energy: f64,
    pub mode: i32,
    pub accousticness: f64,
    pub tempo: f64,
    pub duration_ms: i32,
    pub num_sections: i32,
    pub num_segments: i32,
}
