//! Favorite tracks, one flat per-user collection.
//!
//! The same duality rules as playlist items apply: a favorite points at
//! exactly one of a local track or an external track, external tracks
//! are only favoritable by their owner, and duplicates are rejected by
//! the partial unique indexes.

use muse_core::{CreateFavorite, FavoriteTrack, MuseError, Result, TrackRef, UserId};
use sqlx::{Row, SqlitePool};

use crate::track_refs::ensure_addable;

fn map_favorite(row: &sqlx::sqlite::SqliteRow) -> FavoriteTrack {
    FavoriteTrack {
        id: row.get("id"),
        user_id: row.get("user_id"),
        track_id: row.get("track_id"),
        external_track_id: row.get("external_track_id"),
        created_at: row.get("created_at"),
        title: row.get("title"),
    }
}

const FAVORITE_SELECT: &str = "SELECT ft.id, ft.user_id, ft.track_id, ft.external_track_id, ft.created_at,
        COALESCE(t.title, et.title) AS title
 FROM favorite_tracks ft
 LEFT JOIN tracks t ON ft.track_id = t.id
 LEFT JOIN external_tracks et ON ft.external_track_id = et.id";

/// List the acting user's favorites, newest first.
pub async fn list_for_user(pool: &SqlitePool, user_id: UserId) -> Result<Vec<FavoriteTrack>> {
    let rows = sqlx::query(&format!(
        "{FAVORITE_SELECT} WHERE ft.user_id = ? ORDER BY ft.id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_favorite).collect())
}

/// Mark a track as a favorite of `favorite.user_id`.
pub async fn create(pool: &SqlitePool, favorite: CreateFavorite) -> Result<FavoriteTrack> {
    ensure_addable(pool, favorite.track_ref, favorite.user_id).await?;

    let (track_id, external_track_id) = favorite.track_ref.into_columns();

    let result = sqlx::query(
        "INSERT INTO favorite_tracks (user_id, track_id, external_track_id)
         VALUES (?, ?, ?)",
    )
    .bind(favorite.user_id)
    .bind(track_id)
    .bind(external_track_id)
    .execute(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            MuseError::conflict(format!("{} is already a favorite", favorite.track_ref))
        }
        _ => e.into(),
    })?;

    let row = sqlx::query(&format!("{FAVORITE_SELECT} WHERE ft.id = ?"))
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await?;

    Ok(map_favorite(&row))
}

/// Remove a favorite. Removing a track that was never favorited is a
/// no-op; the return value is the number of rows removed.
pub async fn remove(pool: &SqlitePool, user_id: UserId, track_ref: TrackRef) -> Result<u64> {
    let (track_id, external_track_id) = track_ref.into_columns();

    let result = sqlx::query(
        "DELETE FROM favorite_tracks
         WHERE user_id = ? AND track_id IS ? AND external_track_id IS ?",
    )
    .bind(user_id)
    .bind(track_id)
    .bind(external_track_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
