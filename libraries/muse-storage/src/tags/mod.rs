use muse_core::{MuseError, Result, Tag, TagId};
use sqlx::{Row, SqlitePool};

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Tag>> {
    let rows = sqlx::query("SELECT id, name FROM tags ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| Tag {
            id: row.get("id"),
            name: row.get("name"),
        })
        .collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: TagId) -> Result<Option<Tag>> {
    let row = sqlx::query("SELECT id, name FROM tags WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Tag {
        id: row.get("id"),
        name: row.get("name"),
    }))
}

/// Create a tag. Names are unique; a duplicate fails with a conflict.
pub async fn create(pool: &SqlitePool, name: &str) -> Result<Tag> {
    if name.trim().is_empty() {
        return Err(MuseError::invalid_input("tag name must not be empty"));
    }

    let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                MuseError::conflict(format!("tag '{name}' already exists"))
            }
            _ => e.into(),
        })?;

    let id = result.last_insert_rowid();
    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve created tag".to_string()))
}
