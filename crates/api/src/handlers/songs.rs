//! Handlers for the `/api/song` resource.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use songdex_core::catalog::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, MAX_STAR_RATING};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse, RatedResponse};
use crate::service;
use crate::state::AppState;

/// Optional pagination parameters on `GET /api/song/{title}`.
///
/// With both absent the handler performs an exact-match lookup; with
/// either present it switches to paginated substring search.
#[derive(Debug, Deserialize)]
pub struct SongQueryParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/song/{title}?page=&limit=
pub async fn get_song(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<SongQueryParams>,
) -> AppResult<Response> {
    if params.page.is_none() && params.limit.is_none() {
        return match service::get_song_by_title(&state.pool, &title).await? {
            Some(song) => Ok(Json(DataResponse::new(song)).into_response()),
            None => Ok((
                StatusCode::NOT_FOUND,
                Json(MessageResponse::not_found(format!(
                    "Song with title '{title}' not found"
                ))),
            )
                .into_response()),
        };
    }

    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT);

    match service::search_songs_paginated(&state.pool, &title, page, limit).await? {
        Some(results) => Ok(Json(DataResponse::new(results)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(MessageResponse::not_found(format!(
                "No songs found matching '{title}'"
            ))),
        )
            .into_response()),
    }
}

/// POST /api/song/{title}/rate
///
/// Body: `{"rating": number}`. The body is parsed by hand so the three
/// request-shape failures (missing body, missing key, bad value) get
/// their own 400 messages instead of a generic extractor rejection.
pub async fn rate_song(
    State(state): State<AppState>,
    Path(title): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    // An absent, unparseable, or empty body all count as "no body".
    let body: Value = match serde_json::from_slice::<Value>(&body) {
        Ok(value) if value.as_object().is_some_and(|o| !o.is_empty()) => value,
        _ => return Err(AppError::BadRequest("Request body is required".into())),
    };

    let rating_value = body
        .get("rating")
        .ok_or_else(|| AppError::BadRequest("Rating is required".into()))?;

    let rating = rating_value
        .as_f64()
        .filter(|r| (0.0..=MAX_STAR_RATING).contains(r))
        .ok_or_else(|| {
            AppError::BadRequest("Rating must be a number between 0 and 5".into())
        })?;

    match service::rate_song(&state.pool, &title, rating).await? {
        Some(rated) => Ok(Json(RatedResponse {
            success: true,
            message: format!("Successfully rated '{title}' with {rating} stars"),
            data: rated,
        })
        .into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(MessageResponse::not_found(format!(
                "Song with title '{title}' not found"
            ))),
        )
            .into_response()),
    }
}
