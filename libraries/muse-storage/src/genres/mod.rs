use muse_core::{Genre, GenreId, MuseError, Result};
use sqlx::{Row, SqlitePool};

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Genre>> {
    let rows = sqlx::query("SELECT id, name FROM genres ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| Genre {
            id: row.get("id"),
            name: row.get("name"),
        })
        .collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: GenreId) -> Result<Option<Genre>> {
    let row = sqlx::query("SELECT id, name FROM genres WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Genre {
        id: row.get("id"),
        name: row.get("name"),
    }))
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Genre>> {
    let row = sqlx::query("SELECT id, name FROM genres WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Genre {
        id: row.get("id"),
        name: row.get("name"),
    }))
}

/// Create a genre. Names are unique; a duplicate fails with a conflict.
pub async fn create(pool: &SqlitePool, name: &str) -> Result<Genre> {
    if name.trim().is_empty() {
        return Err(MuseError::invalid_input("genre name must not be empty"));
    }

    let result = sqlx::query("INSERT INTO genres (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                MuseError::conflict(format!("genre '{name}' already exists"))
            }
            _ => e.into(),
        })?;

    let id = result.last_insert_rowid();
    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve created genre".to_string()))
}
