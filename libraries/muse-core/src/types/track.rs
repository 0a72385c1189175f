//! Local track types
//!
//! A local track is a catalog entry backed by an uploaded audio file.
//! Catalog tracks are readable by every authenticated user; only the
//! uploader may edit or delete one.

use serde::{Deserialize, Serialize};

use super::ids::{AlbumId, ArtistId, TrackId, UserId};

/// A local catalog track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: Option<String>,
    pub artist_id: Option<ArtistId>,
    pub artist_name: Option<String>, // Denormalized
    pub album_id: Option<AlbumId>,
    pub album_title: Option<String>, // Denormalized
    pub file_path: Option<String>,
    pub duration_seconds: Option<f64>,
    pub uploaded_by: Option<UserId>,
    pub created_at: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

/// Data for creating a new local track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrack {
    pub title: Option<String>,
    pub artist_id: Option<ArtistId>,
    pub album_id: Option<AlbumId>,
    pub file_path: Option<String>,
    pub duration_seconds: Option<f64>,
    /// Server-assigned from the authenticated identity, never
    /// client-supplied
    #[serde(skip)]
    pub uploaded_by: Option<UserId>,
    #[serde(default)]
    pub genre_ids: Vec<super::ids::GenreId>,
    #[serde(default)]
    pub tag_ids: Vec<super::ids::TagId>,
}

/// Data for updating a local track (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTrack {
    pub title: Option<String>,
    pub artist_id: Option<ArtistId>,
    pub album_id: Option<AlbumId>,
    pub duration_seconds: Option<f64>,
}
