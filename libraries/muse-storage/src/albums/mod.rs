use muse_core::{Album, AlbumId, CreateAlbum, MuseError, Result};
use sqlx::{Row, SqlitePool};

fn map_album(row: &sqlx::sqlite::SqliteRow) -> Album {
    Album {
        id: row.get("id"),
        title: row.get("title"),
        artist_id: row.get("artist_id"),
        artist_name: row.get("artist_name"),
        release_date: row.get("release_date"),
    }
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query(
        "SELECT al.id, al.title, al.artist_id, ar.name AS artist_name, al.release_date
         FROM albums al
         LEFT JOIN artists ar ON al.artist_id = ar.id
         ORDER BY al.title",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_album).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query(
        "SELECT al.id, al.title, al.artist_id, ar.name AS artist_name, al.release_date
         FROM albums al
         LEFT JOIN artists ar ON al.artist_id = ar.id
         WHERE al.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| map_album(&row)))
}

pub async fn create(pool: &SqlitePool, album: CreateAlbum) -> Result<Album> {
    if album.title.trim().is_empty() {
        return Err(MuseError::invalid_input("album title must not be empty"));
    }

    let result = sqlx::query("INSERT INTO albums (title, artist_id, release_date) VALUES (?, ?, ?)")
        .bind(&album.title)
        .bind(album.artist_id)
        .bind(&album.release_date)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();
    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve created album".to_string()))
}
