//! Artist types

use serde::{Deserialize, Serialize};

use super::ids::ArtistId;

/// An artist (shared reference entity, not user-scoped)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub bio: Option<String>,
}

/// Data for creating a new artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub bio: Option<String>,
}
