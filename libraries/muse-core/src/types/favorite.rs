//! Favorite track types

use serde::{Deserialize, Serialize};

use super::ids::{ExternalTrackId, FavoriteId, TrackId, UserId};
use super::track_ref::TrackRef;
use crate::error::Result;

/// A user's favorited track.
///
/// Shares the duality invariant with playlist items: exactly one of
/// `track_id` / `external_track_id` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteTrack {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub track_id: Option<TrackId>,
    pub external_track_id: Option<ExternalTrackId>,
    pub created_at: String,

    /// Denormalized display title of the referenced track
    pub title: Option<String>,
}

impl FavoriteTrack {
    /// Typed view of the stored two-column reference.
    pub fn track_ref(&self) -> Result<TrackRef> {
        TrackRef::from_columns(self.track_id, self.external_track_id)
    }
}

/// Data for favoriting a track
#[derive(Debug, Clone, Copy)]
pub struct CreateFavorite {
    pub user_id: UserId,
    pub track_ref: TrackRef,
}
