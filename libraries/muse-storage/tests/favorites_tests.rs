//! Integration tests for the favorites vertical slice

mod test_helpers;

use muse_core::{CreateFavorite, MuseError, TrackRef};
use test_helpers::*;

#[tokio::test]
async fn test_favorite_local_and_external_tracks() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let track_id = create_test_track(pool, "Local Song", Some(user_id)).await;
    let ext_id = create_test_external_track(pool, user_id, "Online Song", "audius").await;

    let fav1 = muse_storage::favorites::create(
        pool,
        CreateFavorite {
            user_id,
            track_ref: TrackRef::Local(track_id),
        },
    )
    .await
    .expect("Failed to favorite local track");
    assert_eq!(fav1.track_ref().unwrap(), TrackRef::Local(track_id));
    assert_eq!(fav1.title.as_deref(), Some("Local Song"));

    let fav2 = muse_storage::favorites::create(
        pool,
        CreateFavorite {
            user_id,
            track_ref: TrackRef::External(ext_id),
        },
    )
    .await
    .expect("Failed to favorite external track");
    assert_eq!(fav2.track_ref().unwrap(), TrackRef::External(ext_id));

    let favorites = muse_storage::favorites::list_for_user(pool, user_id)
        .await
        .unwrap();
    assert_eq!(favorites.len(), 2);
    // Newest first.
    assert_eq!(favorites[0].id, fav2.id);
}

#[tokio::test]
async fn test_duplicate_favorite_conflicts() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let track_id = create_test_track(pool, "Song", Some(user_id)).await;

    let favorite = CreateFavorite {
        user_id,
        track_ref: TrackRef::Local(track_id),
    };

    muse_storage::favorites::create(pool, favorite).await.unwrap();

    let err = muse_storage::favorites::create(pool, favorite)
        .await
        .unwrap_err();
    assert!(matches!(err, MuseError::Conflict(_)));
}

#[tokio::test]
async fn test_two_users_can_favorite_the_same_track() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;
    let track_id = create_test_track(pool, "Popular Song", Some(alice)).await;

    for user_id in [alice, bob] {
        muse_storage::favorites::create(
            pool,
            CreateFavorite {
                user_id,
                track_ref: TrackRef::Local(track_id),
            },
        )
        .await
        .expect("Each user keeps an independent favorites list");
    }

    assert_eq!(
        muse_storage::favorites::list_for_user(pool, alice)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_cannot_favorite_another_users_external_track() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;
    let ext_id = create_test_external_track(pool, alice, "Alice Song", "mixcloud").await;

    let err = muse_storage::favorites::create(
        pool,
        CreateFavorite {
            user_id: bob,
            track_ref: TrackRef::External(ext_id),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, MuseError::PermissionDenied));
}

#[tokio::test]
async fn test_unfavorite_is_idempotent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let track_id = create_test_track(pool, "Song", Some(user_id)).await;

    muse_storage::favorites::create(
        pool,
        CreateFavorite {
            user_id,
            track_ref: TrackRef::Local(track_id),
        },
    )
    .await
    .unwrap();

    let removed = muse_storage::favorites::remove(pool, user_id, TrackRef::Local(track_id))
        .await
        .unwrap();
    assert_eq!(removed, 1);

    // Removing a track that is not favorited is a quiet no-op.
    let removed = muse_storage::favorites::remove(pool, user_id, TrackRef::Local(track_id))
        .await
        .unwrap();
    assert_eq!(removed, 0);

    let removed = muse_storage::favorites::remove(pool, user_id, TrackRef::External(9999))
        .await
        .unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn test_deleting_external_track_cascades_favorites() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let ext_id = create_test_external_track(pool, user_id, "Online Song", "youtube").await;

    muse_storage::favorites::create(
        pool,
        CreateFavorite {
            user_id,
            track_ref: TrackRef::External(ext_id),
        },
    )
    .await
    .unwrap();

    muse_storage::external_tracks::delete_owned(pool, ext_id, user_id)
        .await
        .unwrap();

    let favorites = muse_storage::favorites::list_for_user(pool, user_id)
        .await
        .unwrap();
    assert!(favorites.is_empty());
}
