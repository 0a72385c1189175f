//! Integration tests for the local tracks vertical slice
//!
//! Covers creation with genre/tag links, filtered listing, pagination,
//! and the uploader-only edit/delete gate.

mod test_helpers;

use muse_core::{CreateTrack, MuseError, UpdateTrack};
use muse_storage::tracks::TrackFilter;
use test_helpers::*;

#[tokio::test]
async fn test_create_track_with_links() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "uploader").await;
    let artist_id = create_test_artist(pool, "The Band").await;
    let album_id = create_test_album(pool, "First Album", Some(artist_id)).await;

    let rock = muse_storage::genres::create(pool, "rock").await.unwrap();
    let live = muse_storage::tags::create(pool, "live").await.unwrap();

    let track = muse_storage::tracks::create(
        pool,
        CreateTrack {
            title: Some("Opening Song".to_string()),
            artist_id: Some(artist_id),
            album_id: Some(album_id),
            file_path: Some("/music/opening.mp3".to_string()),
            duration_seconds: Some(241.5),
            uploaded_by: Some(user_id),
            genre_ids: vec![rock.id],
            tag_ids: vec![live.id],
        },
    )
    .await
    .expect("Failed to create track");

    assert_eq!(track.title.as_deref(), Some("Opening Song"));
    assert_eq!(track.artist_name.as_deref(), Some("The Band"));
    assert_eq!(track.album_title.as_deref(), Some("First Album"));
    assert_eq!(track.uploaded_by, Some(user_id));
    assert_eq!(track.genres, vec!["rock"]);
    assert_eq!(track.tags, vec!["live"]);
}

#[tokio::test]
async fn test_list_with_filters() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;

    let rock = muse_storage::genres::create(pool, "progressive rock").await.unwrap();
    let jazz = muse_storage::genres::create(pool, "jazz").await.unwrap();

    muse_storage::tracks::create(
        pool,
        CreateTrack {
            title: Some("Rock Song".to_string()),
            artist_id: None,
            album_id: None,
            file_path: None,
            duration_seconds: None,
            uploaded_by: Some(alice),
            genre_ids: vec![rock.id],
            tag_ids: Vec::new(),
        },
    )
    .await
    .unwrap();

    muse_storage::tracks::create(
        pool,
        CreateTrack {
            title: Some("Jazz Song".to_string()),
            artist_id: None,
            album_id: None,
            file_path: None,
            duration_seconds: None,
            uploaded_by: Some(bob),
            genre_ids: vec![jazz.id],
            tag_ids: Vec::new(),
        },
    )
    .await
    .unwrap();

    // Genre filter is a case-blind substring match.
    let filter = TrackFilter {
        genre: Some("Rock".to_string()),
        ..Default::default()
    };
    let found = muse_storage::tracks::list(pool, &filter, 50, 0).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title.as_deref(), Some("Rock Song"));

    let filter = TrackFilter {
        uploaded_by: Some(bob),
        ..Default::default()
    };
    let found = muse_storage::tracks::list(pool, &filter, 50, 0).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].uploaded_by, Some(bob));

    // No filter returns the whole shared catalog.
    let all = muse_storage::tracks::list(pool, &TrackFilter::default(), 50, 0)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_list_pagination() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "uploader").await;
    for i in 0..7 {
        create_test_track(pool, &format!("Song {i}"), Some(user_id)).await;
    }

    let page = muse_storage::tracks::list(pool, &TrackFilter::default(), 3, 3)
        .await
        .unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page[0].title.as_deref(), Some("Song 3"));
}

#[tokio::test]
async fn test_only_uploader_may_edit() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;
    let track_id = create_test_track(pool, "Alice Song", Some(alice)).await;

    let changes = UpdateTrack {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };

    let err = muse_storage::tracks::update(pool, track_id, bob, changes.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, MuseError::PermissionDenied));

    let updated = muse_storage::tracks::update(pool, track_id, alice, changes)
        .await
        .unwrap();
    assert_eq!(updated.title.as_deref(), Some("Renamed"));
    // Untouched fields keep their values.
    assert!(updated.file_path.is_some());
}

#[tokio::test]
async fn test_only_uploader_may_delete() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;
    let track_id = create_test_track(pool, "Alice Song", Some(alice)).await;

    let err = muse_storage::tracks::delete(pool, track_id, bob).await.unwrap_err();
    assert!(matches!(err, MuseError::PermissionDenied));

    muse_storage::tracks::delete(pool, track_id, alice).await.unwrap();

    assert!(muse_storage::tracks::get_by_id(pool, track_id)
        .await
        .unwrap()
        .is_none());

    let err = muse_storage::tracks::delete(pool, track_id, alice)
        .await
        .unwrap_err();
    assert!(matches!(err, MuseError::NotFound { .. }));
}

#[tokio::test]
async fn test_deleting_uploader_keeps_track() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "leaver").await;
    let track_id = create_test_track(pool, "Orphan Song", Some(user_id)).await;

    muse_storage::users::delete(pool, user_id).await.unwrap();

    // Catalog tracks outlive their uploader; the link is nulled.
    let track = muse_storage::tracks::get_by_id(pool, track_id)
        .await
        .unwrap()
        .expect("Track should survive uploader deletion");
    assert_eq!(track.uploaded_by, None);
}
