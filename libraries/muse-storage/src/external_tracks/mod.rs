//! Saved external tracks.
//!
//! An external track belongs exclusively to the user who saved it, so
//! every read here is owner-scoped: lookups by another user behave as
//! if the row does not exist. Re-saving the same result, keyed by
//! (owner, title, source), is rejected explicitly instead of silently
//! dropped, so clients can react to the duplicate.

use muse_core::{CreateExternalTrack, ExternalTrack, ExternalTrackId, MuseError, Result, UserId};
use sqlx::{Row, SqlitePool};

const EXTERNAL_TRACK_SELECT: &str =
    "SELECT et.id, et.user_id, et.title, et.artist_id, ar.name AS artist_name,
            et.album_id, et.stream_url, et.thumbnail_url, et.source, et.saved_at
     FROM external_tracks et
     LEFT JOIN artists ar ON et.artist_id = ar.id";

fn map_external_track(row: &sqlx::sqlite::SqliteRow) -> ExternalTrack {
    ExternalTrack {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        artist_id: row.get("artist_id"),
        artist_name: row.get("artist_name"),
        album_id: row.get("album_id"),
        stream_url: row.get("stream_url"),
        thumbnail_url: row.get("thumbnail_url"),
        source: row.get("source"),
        saved_at: row.get("saved_at"),
        genres: Vec::new(),
        tags: Vec::new(),
    }
}

/// List the acting user's saved external tracks.
pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: UserId,
    limit: i64,
    offset: i64,
) -> Result<Vec<ExternalTrack>> {
    let sql = format!(
        "{EXTERNAL_TRACK_SELECT}
         WHERE et.user_id = ?
         ORDER BY et.id
         LIMIT ? OFFSET ?"
    );

    let rows = sqlx::query(&sql)
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(map_external_track).collect())
}

/// Owner-scoped lookup: returns None both when the track is absent and
/// when it belongs to someone else.
pub async fn get_owned(
    pool: &SqlitePool,
    id: ExternalTrackId,
    user_id: UserId,
) -> Result<Option<ExternalTrack>> {
    let sql = format!("{EXTERNAL_TRACK_SELECT} WHERE et.id = ? AND et.user_id = ?");
    let row = sqlx::query(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| map_external_track(&row)))
}

/// Save a search result as an external track.
///
/// A duplicate (owner, title, source) fails with a conflict; the unique
/// index closes the race between concurrent saves.
pub async fn create(pool: &SqlitePool, track: CreateExternalTrack) -> Result<ExternalTrack> {
    if track.title.trim().is_empty() {
        return Err(MuseError::invalid_input("track title must not be empty"));
    }

    let existing = sqlx::query(
        "SELECT 1 FROM external_tracks WHERE user_id = ? AND title = ? AND source IS ?",
    )
    .bind(track.user_id)
    .bind(&track.title)
    .bind(&track.source)
    .fetch_optional(pool)
    .await?;

    if existing.is_some() {
        return Err(MuseError::conflict(format!(
            "'{}' from {} is already saved",
            track.title,
            track.source.as_deref().unwrap_or("unknown source")
        )));
    }

    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO external_tracks
             (user_id, title, artist_id, album_id, stream_url, thumbnail_url, source)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(track.user_id)
    .bind(&track.title)
    .bind(track.artist_id)
    .bind(track.album_id)
    .bind(&track.stream_url)
    .bind(&track.thumbnail_url)
    .bind(&track.source)
    .execute(&mut *tx)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            MuseError::conflict(format!("'{}' is already saved", track.title))
        }
        _ => e.into(),
    })?;

    let id = result.last_insert_rowid();

    for genre_id in &track.genre_ids {
        sqlx::query(
            "INSERT OR IGNORE INTO external_track_genres (external_track_id, genre_id)
             VALUES (?, ?)",
        )
        .bind(id)
        .bind(genre_id)
        .execute(&mut *tx)
        .await?;
    }
    for tag_id in &track.tag_ids {
        sqlx::query(
            "INSERT OR IGNORE INTO external_track_tags (external_track_id, tag_id)
             VALUES (?, ?)",
        )
        .bind(id)
        .bind(tag_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    get_owned(pool, id, track.user_id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve saved external track".to_string()))
}

/// Delete one of the acting user's external tracks. Cascades to
/// playlist items and favorites referencing it.
pub async fn delete_owned(pool: &SqlitePool, id: ExternalTrackId, user_id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM external_tracks WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MuseError::not_found("External track", id));
    }
    Ok(())
}
