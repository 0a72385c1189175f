//! Muse Storage
//!
//! Multi-user `SQLite` persistence layer for the Muse music library.
//!
//! This crate provides persistent storage for the dual-track catalog
//! (local uploads + saved external tracks), playlists, and favorites.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each entity family owns its own queries and logic
//! - **Owner-Scoped Queries**: user-scoped entities are read through
//!   queries that inject the owner predicate, so no code path can return
//!   cross-owner rows
//! - **Constraint Backstop**: uniqueness and the duality invariant are
//!   also enforced by the schema with atomic insert-or-fail semantics
//!
//! # Example
//!
//! ```rust,no_run
//! use muse_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://muse.db").await?;
//! run_migrations(&pool).await?;
//!
//! let playlists = muse_storage::playlists::list_for_user(&pool, 1).await?;
//! # Ok(())
//! # }
//! ```

mod track_refs;

// Vertical slices
pub mod albums;
pub mod artists;
pub mod external_tracks;
pub mod favorites;
pub mod genres;
pub mod playlists;
pub mod tags;
pub mod tracks;
pub mod users;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// Foreign keys are enabled on every connection; the cascade rules of
/// the schema depend on them.
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!(url = %database_url, "database pool created");

    Ok(pool)
}
