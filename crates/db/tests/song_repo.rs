//! Integration tests for the song repository against a real database:
//! - Idempotent bulk insert
//! - Case-insensitive exact and substring matching
//! - Atomic rating updates
//! - Deterministic pagination and exact-match-first ordering

use songdex_db::models::song::NewSong;
use songdex_db::repositories::SongRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_song(id: &str, title: &str) -> NewSong {
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

// ---------------------------------------------------------------------------
// Bulk insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn bulk_insert_is_idempotent(pool: PgPool) {
    let songs = vec![new_song("a", "Alpha"), new_song("b", "Beta")];

    let first = SongRepo::bulk_insert(&pool, &songs).await.unwrap();
    assert_eq!(first, 2);

    // Same batch again: no error, no new rows, no overwrite.
    let second = SongRepo::bulk_insert(&pool, &songs).await.unwrap();
    assert_eq!(second, 0);

    let total = SongRepo::count_matching(&pool, "").await.unwrap();
    assert_eq!(total, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn bulk_insert_empty_batch_is_noop(pool: PgPool) {
    let inserted = SongRepo::bulk_insert(&pool, &[]).await.unwrap();
    assert_eq!(inserted, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn bulk_insert_never_overwrites_existing_rows(pool: PgPool) {
    SongRepo::bulk_insert(&pool, &[new_song("a", "Original")])
        .await
        .unwrap();

    // First write wins: a conflicting id with a different title is skipped.
    let inserted = SongRepo::bulk_insert(&pool, &[new_song("a", "Replacement")])
        .await
        .unwrap();
    assert_eq!(inserted, 0);

    let song = SongRepo::find_by_title(&pool, "Original")
        .await
        .unwrap()
        .expect("original row should survive");
    assert_eq!(song.id, "a");
    assert!(SongRepo::find_by_title(&pool, "Replacement")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Exact match
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn exists_is_case_insensitive(pool: PgPool) {
    SongRepo::bulk_insert(&pool, &[new_song("a", "Love")])
        .await
        .unwrap();

    assert!(SongRepo::exists(&pool, "Love").await.unwrap());
    assert!(SongRepo::exists(&pool, "LOVE").await.unwrap());
    assert!(SongRepo::exists(&pool, "love").await.unwrap());
    assert!(!SongRepo::exists(&pool, "Hate").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_title_returns_full_row_or_none(pool: PgPool) {
    SongRepo::bulk_insert(&pool, &[new_song("a", "Love")])
        .await
        .unwrap();

    let song = SongRepo::find_by_title(&pool, "lOvE")
        .await
        .unwrap()
        .expect("song should be found");

    // Stored case is preserved even though the lookup is not.
    assert_eq!(song.title, "Love");
    assert_eq!(song.id, "a");
    assert_eq!(song.tempo, Some(120.0));
    assert_eq!(song.star_rating, None);

    assert!(SongRepo::find_by_title(&pool, "Missing")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Rating update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_rating_returns_triple_and_persists(pool: PgPool) {
    SongRepo::bulk_insert(&pool, &[new_song("a", "Love")])
        .await
        .unwrap();

    let before = SongRepo::find_by_title(&pool, "Love").await.unwrap().unwrap();

    let updated = SongRepo::update_rating(&pool, "love", 4.5)
        .await
        .unwrap()
        .expect("update should match the row");
    assert_eq!(updated.id, "a");
    assert_eq!(updated.title, "Love");
    assert_eq!(updated.star_rating, Some(4.5));

    let after = SongRepo::find_by_title(&pool, "Love").await.unwrap().unwrap();
    assert_eq!(after.star_rating, Some(4.5));
    assert!(after.updated_at >= before.updated_at);
    assert_eq!(after.created_at, before.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_rating_unknown_title_returns_none(pool: PgPool) {
    let result = SongRepo::update_rating(&pool, "Missing", 3.0).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Listing & search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_page_orders_by_title(pool: PgPool) {
    let songs = vec![
        new_song("c", "Cherry"),
        new_song("a", "Apple"),
        new_song("b", "Banana"),
    ];
    SongRepo::bulk_insert(&pool, &songs).await.unwrap();

    let page = SongRepo::list_page(&pool, 10, 0).await.unwrap();
    let titles: Vec<&str> = page.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Apple", "Banana", "Cherry"]);

    let second = SongRepo::list_page(&pool, 2, 2).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].title, "Cherry");
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_titles_yield_distinct_rows(pool: PgPool) {
    let songs = vec![new_song("a", "Dup"), new_song("b", "Dup")];
    SongRepo::bulk_insert(&pool, &songs).await.unwrap();

    let listed = SongRepo::list_page(&pool, 10, 0).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_ne!(listed[0].id, listed[1].id);

    let found = SongRepo::search_page(&pool, "Dup", 10, 0).await.unwrap();
    assert_eq!(found.len(), 2);
    assert_ne!(found[0].id, found[1].id);
}

#[sqlx::test(migrations = "./migrations")]
async fn search_ranks_exact_match_first(pool: PgPool) {
    // Inserted with the exact match last, so rank ordering (not
    // insertion order) must put it first.
    let songs = vec![new_song("a", "I Love You"), new_song("b", "Love")];
    SongRepo::bulk_insert(&pool, &songs).await.unwrap();

    let results = SongRepo::search_page(&pool, "love", 10, 0).await.unwrap();
    let titles: Vec<&str> = results.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Love", "I Love You"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn search_is_case_insensitive_substring(pool: PgPool) {
    let songs = vec![new_song("a", "Whole Lotta Love"), new_song("b", "Hate")];
    SongRepo::bulk_insert(&pool, &songs).await.unwrap();

    let results = SongRepo::search_page(&pool, "LOVE", 10, 0).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Whole Lotta Love");

    assert_eq!(SongRepo::count_matching(&pool, "LOVE").await.unwrap(), 1);
    assert_eq!(SongRepo::count_matching(&pool, "zzz").await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn search_pages_concatenate_without_gaps_or_duplicates(pool: PgPool) {
    let songs: Vec<NewSong> = (0..5)
        .map(|i| new_song(&format!("id{i}"), &format!("Love {i}")))
        .collect();
    SongRepo::bulk_insert(&pool, &songs).await.unwrap();

    let total = SongRepo::count_matching(&pool, "Love").await.unwrap();
    assert_eq!(total, 5);

    let limit = 2;
    let mut seen: Vec<String> = Vec::new();
    let mut offset = 0;
    loop {
        let page = SongRepo::search_page(&pool, "Love", limit, offset).await.unwrap();
        if page.is_empty() {
            break;
        }
        seen.extend(page.iter().map(|s| s.id.clone()));
        offset += limit;
    }

    assert_eq!(seen.len() as i64, total);
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), seen.len(), "pages must not overlap");
}
