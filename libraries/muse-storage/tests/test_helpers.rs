//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations, constraints, and indexes.

use muse_core::{AlbumId, ArtistId, ExternalTrackId, PlaylistId, TrackId, UserId};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = muse_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        muse_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> UserId {
    let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
        .bind(username)
        .execute(pool)
        .await
        .expect("Failed to create test user");

    result.last_insert_rowid()
}

/// Test fixture: Create a test artist
pub async fn create_test_artist(pool: &SqlitePool, name: &str) -> ArtistId {
    let result = sqlx::query("INSERT INTO artists (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to create test artist");

    result.last_insert_rowid()
}

/// Test fixture: Create a test album
pub async fn create_test_album(
    pool: &SqlitePool,
    title: &str,
    artist_id: Option<ArtistId>,
) -> AlbumId {
    let result = sqlx::query("INSERT INTO albums (title, artist_id) VALUES (?, ?)")
        .bind(title)
        .bind(artist_id)
        .execute(pool)
        .await
        .expect("Failed to create test album");

    result.last_insert_rowid()
}

/// Test fixture: Create a local catalog track
pub async fn create_test_track(
    pool: &SqlitePool,
    title: &str,
    uploaded_by: Option<UserId>,
) -> TrackId {
    let result = sqlx::query(
        "INSERT INTO tracks (title, file_path, uploaded_by) VALUES (?, ?, ?)",
    )
    .bind(title)
    .bind(format!("/music/{title}.mp3"))
    .bind(uploaded_by)
    .execute(pool)
    .await
    .expect("Failed to create test track");

    result.last_insert_rowid()
}

/// Test fixture: Create a saved external track owned by `user_id`
pub async fn create_test_external_track(
    pool: &SqlitePool,
    user_id: UserId,
    title: &str,
    source: &str,
) -> ExternalTrackId {
    let result = sqlx::query(
        "INSERT INTO external_tracks (user_id, title, stream_url, source)
         VALUES (?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(title)
    .bind(format!("https://example.com/{title}"))
    .bind(source)
    .execute(pool)
    .await
    .expect("Failed to create test external track");

    result.last_insert_rowid()
}

/// Test fixture: Create a playlist
pub async fn create_test_playlist(pool: &SqlitePool, name: &str, owner_id: UserId) -> PlaylistId {
    let result = sqlx::query("INSERT INTO playlists (name, owner_id) VALUES (?, ?)")
        .bind(name)
        .bind(owner_id)
        .execute(pool)
        .await
        .expect("Failed to create test playlist");

    result.last_insert_rowid()
}
