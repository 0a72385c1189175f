//! Album types

use serde::{Deserialize, Serialize};

use super::ids::{AlbumId, ArtistId};

/// An album (shared reference entity, not user-scoped)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist_id: Option<ArtistId>,
    pub artist_name: Option<String>, // Denormalized
    pub release_date: Option<String>,
}

/// Data for creating a new album
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlbum {
    pub title: String,
    pub artist_id: Option<ArtistId>,
    pub release_date: Option<String>,
}
