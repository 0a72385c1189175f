//! User management and authentication queries

use muse_core::{MuseError, Result, User, UserId};
use sqlx::{Row, SqlitePool};

fn map_user(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

/// Create a new user. Names are unique; a duplicate name fails with a
/// conflict.
pub async fn create(pool: &SqlitePool, name: &str) -> Result<User> {
    if name.trim().is_empty() {
        return Err(MuseError::invalid_input("user name must not be empty"));
    }

    let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                MuseError::conflict(format!("user '{name}' already exists"))
            }
            _ => e.into(),
        })?;

    let id = result.last_insert_rowid();
    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MuseError::Database("failed to retrieve created user".to_string()))
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| map_user(&row)))
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, created_at FROM users WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| map_user(&row)))
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, created_at FROM users ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(map_user).collect())
}

pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MuseError::not_found("User", id));
    }
    Ok(())
}

/// Get user's password hash for authentication
///
/// Returns the password hash if found, or None if user has no credentials
pub async fn get_password_hash(pool: &SqlitePool, user_id: UserId) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Create or update user credentials
///
/// The hash must already be computed by the caller; this layer never
/// sees plaintext passwords.
pub async fn set_password_hash(
    pool: &SqlitePool,
    user_id: UserId,
    password_hash: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_at)
         VALUES (?, ?, datetime('now'))
         ON CONFLICT(user_id)
         DO UPDATE SET password_hash = excluded.password_hash, updated_at = datetime('now')",
    )
    .bind(user_id)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(())
}
