//! Integration tests for the external tracks vertical slice
//!
//! Saved search results are strictly per-user: every read and delete is
//! scoped to the owner, and saving the same result twice is rejected.

mod test_helpers;

use muse_core::{CreateExternalTrack, MuseError};
use test_helpers::*;

fn saved_result(user_id: i64, title: &str, source: &str) -> CreateExternalTrack {
    CreateExternalTrack {
        title: title.to_string(),
        artist_id: None,
        album_id: None,
        stream_url: Some(format!("https://example.com/{title}")),
        thumbnail_url: None,
        source: Some(source.to_string()),
        user_id,
        genre_ids: Vec::new(),
        tag_ids: Vec::new(),
    }
}

#[tokio::test]
async fn test_save_and_list_external_tracks() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;

    let saved = muse_storage::external_tracks::create(pool, saved_result(user_id, "Song A", "jamendo"))
        .await
        .expect("Failed to save external track");

    assert_eq!(saved.title, "Song A");
    assert_eq!(saved.user_id, user_id);
    assert_eq!(saved.source.as_deref(), Some("jamendo"));

    muse_storage::external_tracks::create(pool, saved_result(user_id, "Song B", "youtube"))
        .await
        .unwrap();

    let listed = muse_storage::external_tracks::list_for_user(pool, user_id, 10, 0)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "Song A");
}

#[tokio::test]
async fn test_save_rejects_empty_title() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;

    let err = muse_storage::external_tracks::create(pool, saved_result(user_id, "  ", "jamendo"))
        .await
        .unwrap_err();
    assert!(matches!(err, MuseError::InvalidInput(_)));
}

#[tokio::test]
async fn test_duplicate_save_conflicts() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;

    muse_storage::external_tracks::create(pool, saved_result(alice, "Same Song", "youtube"))
        .await
        .unwrap();

    // Same title and source for the same user is a duplicate.
    let err = muse_storage::external_tracks::create(pool, saved_result(alice, "Same Song", "youtube"))
        .await
        .unwrap_err();
    assert!(matches!(err, MuseError::Conflict(_)));

    // Same title from a different provider is a distinct save.
    muse_storage::external_tracks::create(pool, saved_result(alice, "Same Song", "audius"))
        .await
        .expect("Different source should not collide");

    // Another user may save the identical result.
    muse_storage::external_tracks::create(pool, saved_result(bob, "Same Song", "youtube"))
        .await
        .expect("Duplicate detection is per-user");
}

#[tokio::test]
async fn test_duplicate_sourceless_save_conflicts() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;

    let mut first = saved_result(user_id, "Same Song", "unused");
    first.source = None;
    let mut second = saved_result(user_id, "Same Song", "unused");
    second.source = None;

    muse_storage::external_tracks::create(pool, first).await.unwrap();

    let err = muse_storage::external_tracks::create(pool, second)
        .await
        .unwrap_err();
    assert!(matches!(err, MuseError::Conflict(_)));
}

#[tokio::test]
async fn test_unique_index_covers_null_source() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;

    // Insert directly, bypassing the duplicate pre-check, so the index
    // itself must reject the second sourceless save.
    let insert = "INSERT INTO external_tracks (user_id, title, source) VALUES (?, ?, NULL)";
    sqlx::query(insert)
        .bind(user_id)
        .bind("Same Song")
        .execute(pool)
        .await
        .unwrap();

    let err = sqlx::query(insert)
        .bind(user_id)
        .bind("Same Song")
        .execute(pool)
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lists_are_owner_scoped() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;

    let alice_track = create_test_external_track(pool, alice, "Alice Song", "mixcloud").await;

    let bob_list = muse_storage::external_tracks::list_for_user(pool, bob, 10, 0)
        .await
        .unwrap();
    assert!(bob_list.is_empty());

    let fetched = muse_storage::external_tracks::get_owned(pool, alice_track, bob)
        .await
        .unwrap();
    assert!(fetched.is_none());

    let err = muse_storage::external_tracks::delete_owned(pool, alice_track, bob)
        .await
        .unwrap_err();
    assert!(matches!(err, MuseError::NotFound { .. }));

    // Untouched for the owner.
    assert!(muse_storage::external_tracks::get_owned(pool, alice_track, alice)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_list_pagination() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    for i in 0..5 {
        create_test_external_track(pool, user_id, &format!("Song {i}"), "jamendo").await;
    }

    let page = muse_storage::external_tracks::list_for_user(pool, user_id, 2, 2)
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].title, "Song 2");
    assert_eq!(page[1].title, "Song 3");
}

#[tokio::test]
async fn test_delete_owned() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let ext_id = create_test_external_track(pool, user_id, "Song", "audius").await;

    muse_storage::external_tracks::delete_owned(pool, ext_id, user_id)
        .await
        .unwrap();

    assert!(muse_storage::external_tracks::get_owned(pool, ext_id, user_id)
        .await
        .unwrap()
        .is_none());
}
