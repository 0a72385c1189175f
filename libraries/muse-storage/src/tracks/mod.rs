//! Local catalog tracks.
//!
//! Tracks are readable by every authenticated user; edit and delete are
//! gated on the uploader. Deleting a track cascades to playlist items
//! and favorites referencing it.

use muse_core::{CreateTrack, MuseError, Result, Track, TrackId, UpdateTrack, UserId};
use sqlx::{Row, SqlitePool};

/// Filter for track listings, mirroring the catalog's query surface:
/// substring match on genre/tag name plus an exact uploader match.
#[derive(Debug, Default, Clone)]
pub struct TrackFilter {
    pub genre: Option<String>,
    pub tag: Option<String>,
    pub uploaded_by: Option<UserId>,
}

const TRACK_SELECT: &str = "SELECT t.id, t.title, t.artist_id, ar.name AS artist_name,
            t.album_id, al.title AS album_title, t.file_path, t.duration_seconds,
            t.uploaded_by, t.created_at
     FROM tracks t
     LEFT JOIN artists ar ON t.artist_id = ar.id
     LEFT JOIN albums al ON t.album_id = al.id";

fn map_track(row: &sqlx::sqlite::SqliteRow) -> Track {
    Track {
        id: row.get("id"),
        title: row.get("title"),
        artist_id: row.get("artist_id"),
        artist_name: row.get("artist_name"),
        album_id: row.get("album_id"),
        album_title: row.get("album_title"),
        file_path: row.get("file_path"),
        duration_seconds: row.get("duration_seconds"),
        uploaded_by: row.get("uploaded_by"),
        created_at: row.get("created_at"),
        genres: Vec::new(),
        tags: Vec::new(),
    }
}

pub async fn list(
    pool: &SqlitePool,
    filter: &TrackFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<Track>> {
    let sql = format!(
        "{TRACK_SELECT}
         WHERE (?1 IS NULL OR t.uploaded_by = ?1)
           AND (?2 IS NULL OR EXISTS (
                SELECT 1 FROM track_genres tg
                JOIN genres g ON tg.genre_id = g.id
                WHERE tg.track_id = t.id AND g.name LIKE '%' || ?2 || '%'))
           AND (?3 IS NULL OR EXISTS (
                SELECT 1 FROM track_tags tt
                JOIN tags tag ON tt.tag_id = tag.id
                WHERE tt.track_id = t.id AND tag.name LIKE '%' || ?3 || '%'))
         ORDER BY t.id
         LIMIT ?4 OFFSET ?5"
    );

    let rows = sqlx::query(&sql)
        .bind(filter.uploaded_by)
        .bind(&filter.genre)
        .bind(&filter.tag)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(map_track).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: TrackId) -> Result<Option<Track>> {
    let sql = format!("{TRACK_SELECT} WHERE t.id = ?");
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut track = map_track(&row);

    track.genres = sqlx::query(
        "SELECT g.name FROM genres g
         JOIN track_genres tg ON g.id = tg.genre_id
         WHERE tg.track_id = ? ORDER BY g.name",
    )
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|r| r.get("name"))
    .collect();

    track.tags = sqlx::query(
        "SELECT tag.name FROM tags tag
         JOIN track_tags tt ON tag.id = tt.tag_id
         WHERE tt.track_id = ? ORDER BY tag.name",
    )
    .bind(id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|r| r.get("name"))
    .collect();

    Ok(Some(track))
}

/// Create a local track together with its genre/tag links.
pub async fn create(pool: &SqlitePool, track: CreateTrack) -> Result<Track> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO tracks (title, artist_id, album_id, file_path, duration_seconds, uploaded_by)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&track.title)
    .bind(track.artist_id)
    .bind(track.album_id)
    .bind(&track.file_path)
    .bind(track.duration_seconds)
    .bind(track.uploaded_by)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();

    for genre_id in &track.genre_ids {
        sqlx::query("INSERT OR IGNORE INTO track_genres (track_id, genre_id) VALUES (?, ?)")
            .bind(id)
            .bind(genre_id)
            .execute(&mut *tx)
            .await?;
    }
    for tag_id in &track.tag_ids {
        sqlx::query("INSERT OR IGNORE INTO track_tags (track_id, tag_id) VALUES (?, ?)")
            .bind(id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve created track".to_string()))
}

/// Update a track. Only the uploader may edit; reads stay unrestricted.
pub async fn update(
    pool: &SqlitePool,
    id: TrackId,
    actor: UserId,
    changes: UpdateTrack,
) -> Result<Track> {
    let existing = get_by_id(pool, id)
        .await?
        .ok_or_else(|| MuseError::not_found("Track", id))?;

    if existing.uploaded_by != Some(actor) {
        return Err(MuseError::PermissionDenied);
    }

    sqlx::query(
        "UPDATE tracks
         SET title = COALESCE(?, title),
             artist_id = COALESCE(?, artist_id),
             album_id = COALESCE(?, album_id),
             duration_seconds = COALESCE(?, duration_seconds)
         WHERE id = ?",
    )
    .bind(&changes.title)
    .bind(changes.artist_id)
    .bind(changes.album_id)
    .bind(changes.duration_seconds)
    .bind(id)
    .execute(pool)
    .await?;

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve updated track".to_string()))
}

/// Delete a track. Only the uploader may delete; cascades to playlist
/// items and favorites.
pub async fn delete(pool: &SqlitePool, id: TrackId, actor: UserId) -> Result<()> {
    let row = sqlx::query("SELECT uploaded_by FROM tracks WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| MuseError::not_found("Track", id))?;

    if row.get::<Option<UserId>, _>("uploaded_by") != Some(actor) {
        return Err(MuseError::PermissionDenied);
    }

    sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
