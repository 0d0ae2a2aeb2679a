//! Validation and pagination rules for catalog queries.
//!
//! Every mutation and lookup is gated by these checks before any
//! database call, so the repository layer never sees malformed input.

use crate::error::CoreError;

/// Maximum accepted title length, matching the `VARCHAR(255)` column.
pub const MAX_TITLE_LEN: usize = 255;

/// Page number used when the caller omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller omits `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum page size for any paginated listing.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Inclusive upper bound for star ratings.
pub const MAX_STAR_RATING: f64 = 5.0;

/// Validate a song title and return it trimmed.
///
/// Rejects titles that are empty after trimming, longer than
/// [`MAX_TITLE_LEN`] characters, or containing a NUL byte.
pub fn validate_title(title: &str) -> Result<&str, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Song title cannot be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(
            "Song title too long (maximum 255 characters)".into(),
        ));
    }
    if title.contains('\0') {
        return Err(CoreError::Validation(
            "Song title contains invalid characters".into(),
        ));
    }
    Ok(trimmed)
}

/// Validate a star rating and round it to one decimal place.
///
/// Accepts any finite number in `[0, 5]` inclusive.
pub fn validate_rating(rating: f64) -> Result<f64, CoreError> {
    if !rating.is_finite() || !(0.0..=MAX_STAR_RATING).contains(&rating) {
        return Err(CoreError::Validation(
            "Rating must be between 0 and 5".into(),
        ));
    }
    Ok(round1(rating))
}

/// Validate 1-based page number and page size bounds.
pub fn validate_page_params(page: i64, limit: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation(
            "Page number must be 1 or greater".into(),
        ));
    }
    if limit < 1 || limit > MAX_PAGE_LIMIT {
        return Err(CoreError::Validation(
            "Limit must be between 1 and 100".into(),
        ));
    }
    Ok(())
}

/// Convert a 1-based page number to a zero-based row offset.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Total number of pages needed for `total_count` rows (ceiling division).
pub fn total_pages(total_count: i64, limit: i64) -> i64 {
    (total_count + limit - 1) / limit
}

/// Round to one decimal place (star ratings).
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places (derived durations).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to three decimal places (audio features).
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Derive a song's duration in minutes, rounded to two decimals.
///
/// `None` or zero milliseconds yields `None`; null propagates rather
/// than rendering as `0.0`.
pub fn duration_minutes(duration_ms: Option<i32>) -> Option<f64> {
    match duration_ms {
        Some(ms) if ms > 0 => Some(round2(f64::from(ms) / 60_000.0)),
        _ => None,
    }
}
