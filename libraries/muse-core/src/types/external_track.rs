//! External track types
//!
//! An external track is a search result a user has saved. It is owned
//! exclusively by the saving user and carries the provider name it was
//! discovered through.

use serde::{Deserialize, Serialize};

use super::ids::{AlbumId, ArtistId, ExternalTrackId, GenreId, TagId, UserId};

/// A saved external track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalTrack {
    pub id: ExternalTrackId,
    pub user_id: UserId,
    pub title: String,
    pub artist_id: Option<ArtistId>,
    pub artist_name: Option<String>, // Denormalized
    pub album_id: Option<AlbumId>,
    pub stream_url: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Provider this track was discovered through ("youtube",
    /// "jamendo", ...)
    pub source: Option<String>,
    pub saved_at: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

/// Data for saving a search result as an external track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExternalTrack {
    pub title: String,
    pub artist_id: Option<ArtistId>,
    pub album_id: Option<AlbumId>,
    pub stream_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub source: Option<String>,
    /// Server-assigned from the authenticated identity
    #[serde(skip)]
    pub user_id: UserId,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
}
