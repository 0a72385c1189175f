/// User domain type
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login / display name
    pub name: String,

    /// Account creation timestamp (ISO string)
    pub created_at: String,
}
