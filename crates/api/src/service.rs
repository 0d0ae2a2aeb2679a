//! Query/rating service: input validation, pagination metadata, and
//! response shaping over the repository layer.
//!
//! Holds no state; every function validates its input before the first
//! repository call, so malformed requests never reach the database.
//! Not-found outcomes are `Ok(None)`, never errors.

use serde::Serialize;
use songdex_core::catalog::{
    duration_minutes, page_offset, round3, total_pages, validate_page_params, validate_rating,
    validate_title,
};
use songdex_core::types::Timestamp;
use songdex_db::models::song::{Song, SongListRow, SongSearchRow};
use songdex_db::repositories::SongRepo;
use songdex_db::DbPool;

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Fully-enriched song returned by exact-title lookup.
///
/// The internal `index_col` surrogate is deliberately not exposed.
#[derive(Debug, Serialize)]
pub struct SongDetail {
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
    pub is_rated: bool,
    /// `duration_ms / 60000` rounded to two decimals; `None` when the
    /// stored duration is null or zero.
    pub duration_minutes: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Song> for SongDetail {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            title: song.title,
            danceability: song.danceability.map(round3),
            energy: song.energy.map(round3),
            mode: song.mode,
            accousticness: song.accousticness.map(round3),
            tempo: song.tempo.map(round3),
            duration_ms: song.duration_ms,
            num_sections: song.num_sections,
            num_segments: song.num_segments,
            star_rating: song.star_rating,
            is_rated: song.star_rating.is_some(),
            duration_minutes: duration_minutes(song.duration_ms),
            created_at: song.created_at,
            updated_at: song.updated_at,
        }
    }
}

/// One row of a paginated title search.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub star_rating: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub mode: Option<i32>,
    pub accousticness: Option<f64>,
    pub tempo: Option<f64>,
    pub duration_ms: Option<i32>,
    pub is_rated: bool,
}

impl From<SongSearchRow> for SearchResult {
    fn from(row: SongSearchRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            star_rating: row.star_rating,
            danceability: row.danceability,
            energy: row.energy,
            mode: row.mode,
            accousticness: row.accousticness,
            tempo: row.tempo,
            duration_ms: row.duration_ms,
            is_rated: row.star_rating.is_some(),
        }
    }
}

/// Pagination metadata for title search.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub current_page: i64,
    pub per_page: i64,
    pub total_results: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_page: Option<i64>,
    pub prev_page: Option<i64>,
}

/// A page of search results.
///
/// `total_results` comes from a COUNT statement separate from the page
/// query, so under concurrent writes the two can disagree slightly.
#[derive(Debug, Serialize)]
pub struct SearchResultsPage {
    pub songs: Vec<SearchResult>,
    pub search_term: String,
    pub pagination: Pagination,
}

/// Rating-update confirmation payload.
#[derive(Debug, Serialize)]
pub struct RatedSong {
    pub id: String,
    pub title: String,
    pub rating: Option<f64>,
    pub message: String,
}

/// One row of the full-catalog listing.
#[derive(Debug, Serialize)]
pub struct SongSummary {
    pub title: String,
    pub id: String,
    pub rating: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub mode: Option<i32>,
    pub is_rated: bool,
}

impl From<SongListRow> for SongSummary {
    fn from(row: SongListRow) -> Self {
        Self {
            title: row.title,
            id: row.id,
            rating: row.star_rating,
            danceability: row.danceability.map(round3),
            energy: row.energy.map(round3),
            mode: row.mode,
            is_rated: row.star_rating.is_some(),
        }
    }
}

/// Pagination metadata for the full-catalog listing.
#[derive(Debug, Serialize)]
pub struct ListPagination {
    pub page: i64,
    pub limit: i64,
    pub count: usize,
    /// Heuristic: true when this page is full. A false positive occurs
    /// when the total count is an exact multiple of `limit` and this is
    /// the last page; it is an approximation, not an exact total.
    pub has_more: bool,
}

/// A page of the full catalog.
#[derive(Debug, Serialize)]
pub struct SongListPage {
    pub songs: Vec<SongSummary>,
    pub pagination: ListPagination,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Exact-match lookup by title, enriched for presentation.
pub async fn get_song_by_title(pool: &DbPool, title: &str) -> AppResult<Option<SongDetail>> {
    let title = validate_title(title)?;

    let Some(song) = SongRepo::find_by_title(pool, title).await? else {
        tracing::info!(title, "Song not found");
        return Ok(None);
    };

    Ok(Some(SongDetail::from(song)))
}

/// Paginated case-insensitive substring search by title.
///
/// Returns `None` when the requested page is empty, even if other pages
/// would not be.
pub async fn search_songs_paginated(
    pool: &DbPool,
    title: &str,
    page: i64,
    limit: i64,
) -> AppResult<Option<SearchResultsPage>> {
    let title = validate_title(title)?;
    validate_page_params(page, limit)?;

    let offset = page_offset(page, limit);
    let rows = SongRepo::search_page(pool, title, limit, offset).await?;
    let total_results = SongRepo::count_matching(pool, title).await?;

    if rows.is_empty() {
        tracing::info!(title, page, "No songs found for paginated search");
        return Ok(None);
    }

    let total_pages = total_pages(total_results, limit);
    let has_next = page < total_pages;
    let has_prev = page > 1;

    Ok(Some(SearchResultsPage {
        songs: rows.into_iter().map(SearchResult::from).collect(),
        search_term: title.to_string(),
        pagination: Pagination {
            current_page: page,
            per_page: limit,
            total_results,
            total_pages,
            has_next,
            has_prev,
            next_page: has_next.then(|| page + 1),
            prev_page: has_prev.then(|| page - 1),
        },
    }))
}

/// Rate a song. The rating is rounded to one decimal before the update.
///
/// Returns `None` when the song does not exist. The existence probe and
/// the update are two separate statements; the update itself is a single
/// atomic read-modify-write.
pub async fn rate_song(pool: &DbPool, title: &str, rating: f64) -> AppResult<Option<RatedSong>> {
    let title = validate_title(title)?;
    let rating = validate_rating(rating)?;

    if !SongRepo::exists(pool, title).await? {
        tracing::info!(title, "Song not found for rating");
        return Ok(None);
    }

    let Some(updated) = SongRepo::update_rating(pool, title, rating).await? else {
        // The row vanished between the probe and the update. No delete
        // path exists today, but the gap is handled anyway.
        tracing::warn!(title, "Rating update matched no rows after existence probe");
        return Ok(None);
    };

    tracing::info!(title, rating, id = %updated.id, "Updated song rating");
    Ok(Some(RatedSong {
        id: updated.id,
        title: updated.title,
        rating: updated.star_rating,
        message: format!("Successfully updated rating to {rating} stars"),
    }))
}

/// One page of the full catalog, ordered by title.
pub async fn list_songs(pool: &DbPool, page: i64, limit: i64) -> AppResult<SongListPage> {
    validate_page_params(page, limit)?;

    let offset = page_offset(page, limit);
    let rows = SongRepo::list_page(pool, limit, offset).await?;

    let count = rows.len();
    let has_more = count as i64 == limit;

    Ok(SongListPage {
        songs: rows.into_iter().map(SongSummary::from).collect(),
        pagination: ListPagination {
            page,
            limit,
            count,
            has_more,
        },
    })
}
