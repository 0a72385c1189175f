/// Core error types for Muse
use thiserror::Error;

/// Result type alias using `MuseError`
pub type Result<T> = std::result::Result<T, MuseError>;

/// Core error type for Muse
#[derive(Error, Debug)]
pub enum MuseError {
    /// A playlist item or favorite referenced both or neither of
    /// {local track, external track}
    #[error("Invalid track reference: {0}")]
    InvalidReference(String),

    /// Malformed or missing input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: &'static str,
        /// Identifier used for the lookup
        id: String,
    },

    /// Actor does not own the resource
    #[error("Permission denied")]
    PermissionDenied,

    /// Uniqueness violation: duplicate favorite, duplicate playlist
    /// item, duplicate saved external track, duplicate genre/tag name
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Search provider failure (absorbed by the aggregator, surfaced
    /// only when a single provider is queried directly)
    #[error("Search provider error: {0}")]
    Provider(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MuseError {
    /// Create a not found error
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for MuseError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // Constraint violations are re-surfaced with their taxonomy
            // class instead of leaking as raw database errors.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_check_violation() => {
                Self::InvalidReference(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Self::InvalidInput("referenced entity does not exist".to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}
