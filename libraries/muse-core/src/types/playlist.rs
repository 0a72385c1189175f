//! Playlist domain types

use serde::{Deserialize, Serialize};

use super::ids::{ExternalTrackId, PlaylistId, PlaylistItemId, TrackId, UserId};
use super::track_ref::TrackRef;
use crate::error::Result;

/// A user-owned playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub owner_id: UserId,
    pub name: String,
    pub created_at: String,
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    /// Server-assigned from the authenticated identity
    #[serde(skip)]
    pub owner_id: UserId,
}

/// A single entry in a playlist.
///
/// Exactly one of `track_id` / `external_track_id` is set; use
/// [`PlaylistItem::track_ref`] for the typed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: PlaylistItemId,
    pub playlist_id: PlaylistId,
    pub track_id: Option<TrackId>,
    pub external_track_id: Option<ExternalTrackId>,
    pub added_at: String,

    /// Denormalized display title of the referenced track
    pub title: Option<String>,
}

impl PlaylistItem {
    /// Typed view of the stored two-column reference.
    pub fn track_ref(&self) -> Result<TrackRef> {
        TrackRef::from_columns(self.track_id, self.external_track_id)
    }
}
