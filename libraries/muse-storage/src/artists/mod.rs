use muse_core::{Artist, ArtistId, CreateArtist, MuseError, Result};
use sqlx::{Row, SqlitePool};

fn map_artist(row: &sqlx::sqlite::SqliteRow) -> Artist {
    Artist {
        id: row.get("id"),
        name: row.get("name"),
        bio: row.get("bio"),
    }
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query("SELECT id, name, bio FROM artists ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(map_artist).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT id, name, bio FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| map_artist(&row)))
}

pub async fn create(pool: &SqlitePool, artist: CreateArtist) -> Result<Artist> {
    if artist.name.trim().is_empty() {
        return Err(MuseError::invalid_input("artist name must not be empty"));
    }

    let result = sqlx::query("INSERT INTO artists (name, bio) VALUES (?, ?)")
        .bind(&artist.name)
        .bind(&artist.bio)
        .execute(pool)
        .await?;

    let id = result.last_insert_rowid();
    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve created artist".to_string()))
}
