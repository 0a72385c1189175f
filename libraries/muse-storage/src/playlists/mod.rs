//! Playlist engine.
//!
//! Every read of a playlist injects the owner predicate, so a playlist
//! that exists but belongs to someone else is indistinguishable from
//! one that does not exist. Items carry the duality invariant (exactly
//! one of local/external reference), validated here before the insert
//! and backstopped by the schema's CHECK constraint and partial unique
//! indexes.

use muse_core::{
    CreatePlaylist, MuseError, Playlist, PlaylistId, PlaylistItem, Result, TrackRef, UserId,
};
use sqlx::{Row, SqlitePool};

use crate::track_refs::ensure_addable;

fn map_playlist(row: &sqlx::sqlite::SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

fn map_item(row: &sqlx::sqlite::SqliteRow) -> PlaylistItem {
    PlaylistItem {
        id: row.get("id"),
        playlist_id: row.get("playlist_id"),
        track_id: row.get("track_id"),
        external_track_id: row.get("external_track_id"),
        added_at: row.get("added_at"),
        title: row.get("title"),
    }
}

/// Create a new playlist owned by `playlist.owner_id`.
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    if playlist.name.trim().is_empty() {
        return Err(MuseError::invalid_input("playlist name must not be empty"));
    }

    let result = sqlx::query("INSERT INTO playlists (name, owner_id) VALUES (?, ?)")
        .bind(&playlist.name)
        .bind(playlist.owner_id)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();

    get_owned(pool, id, playlist.owner_id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve created playlist".to_string()))
}

/// List the acting user's playlists.
pub async fn list_for_user(pool: &SqlitePool, owner_id: UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        "SELECT id, owner_id, name, created_at
         FROM playlists
         WHERE owner_id = ?
         ORDER BY id",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_playlist).collect())
}

/// Owner-scoped lookup: returns None both when the playlist is absent
/// and when it belongs to someone else.
pub async fn get_owned(
    pool: &SqlitePool,
    id: PlaylistId,
    owner_id: UserId,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        "SELECT id, owner_id, name, created_at
         FROM playlists
         WHERE id = ? AND owner_id = ?",
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| map_playlist(&row)))
}

/// List a playlist's items, with the referenced track's title joined in.
pub async fn items(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    owner_id: UserId,
) -> Result<Vec<PlaylistItem>> {
    get_owned(pool, playlist_id, owner_id)
        .await?
        .ok_or_else(|| MuseError::not_found("Playlist", playlist_id))?;

    let rows = sqlx::query(
        "SELECT pi.id, pi.playlist_id, pi.track_id, pi.external_track_id, pi.added_at,
                COALESCE(t.title, et.title) AS title
         FROM playlist_items pi
         LEFT JOIN tracks t ON pi.track_id = t.id
         LEFT JOIN external_tracks et ON pi.external_track_id = et.id
         WHERE pi.playlist_id = ?
         ORDER BY pi.id",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_item).collect())
}

/// Add a track reference to a playlist.
///
/// Local catalog tracks are addable by any authenticated user; external
/// tracks only by their owner. Adding a reference that is already
/// present fails with a conflict, guaranteed by the partial unique
/// indexes even under concurrent requests.
pub async fn add_track(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    track_ref: TrackRef,
    actor: UserId,
) -> Result<PlaylistItem> {
    get_owned(pool, playlist_id, actor)
        .await?
        .ok_or_else(|| MuseError::not_found("Playlist", playlist_id))?;

    ensure_addable(pool, track_ref, actor).await?;

    let (track_id, external_track_id) = track_ref.into_columns();

    let result = sqlx::query(
        "INSERT INTO playlist_items (playlist_id, track_id, external_track_id)
         VALUES (?, ?, ?)",
    )
    .bind(playlist_id)
    .bind(track_id)
    .bind(external_track_id)
    .execute(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            MuseError::conflict(format!("{track_ref} is already in the playlist"))
        }
        _ => e.into(),
    })?;

    let item_id = result.last_insert_rowid();

    let row = sqlx::query(
        "SELECT pi.id, pi.playlist_id, pi.track_id, pi.external_track_id, pi.added_at,
                COALESCE(t.title, et.title) AS title
         FROM playlist_items pi
         LEFT JOIN tracks t ON pi.track_id = t.id
         LEFT JOIN external_tracks et ON pi.external_track_id = et.id
         WHERE pi.id = ?",
    )
    .bind(item_id)
    .fetch_one(pool)
    .await?;

    Ok(map_item(&row))
}

/// Remove a track reference from a playlist.
///
/// Returns the number of items removed; removing an absent reference is
/// not an error and returns 0.
pub async fn remove_track(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    track_ref: TrackRef,
    actor: UserId,
) -> Result<u64> {
    get_owned(pool, playlist_id, actor)
        .await?
        .ok_or_else(|| MuseError::not_found("Playlist", playlist_id))?;

    let (track_id, external_track_id) = track_ref.into_columns();

    let result = sqlx::query(
        "DELETE FROM playlist_items
         WHERE playlist_id = ? AND track_id IS ? AND external_track_id IS ?",
    )
    .bind(playlist_id)
    .bind(track_id)
    .bind(external_track_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a playlist. Cascades to its items.
pub async fn delete(pool: &SqlitePool, id: PlaylistId, owner_id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ? AND owner_id = ?")
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MuseError::not_found("Playlist", id));
    }
    Ok(())
}
