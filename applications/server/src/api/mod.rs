/// API route modules
pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod external_tracks;
pub mod health;
pub mod playlists;
pub mod search;
pub mod tracks;

use muse_core::{ExternalTrackId, TrackId, TrackRef};
use serde::Deserialize;

use crate::error::ServerError;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 50;

/// Standard page/page_size query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Pagination {
    /// Resolve to a LIMIT/OFFSET pair. Page numbering starts at 1;
    /// page_size is clamped to the allowed range.
    pub fn limit_offset(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page_size, (page - 1) * page_size)
    }
}

/// Request body for referencing a track: exactly one of `track_id`
/// (local catalog) or `online_track_id` (saved external track).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrackRefBody {
    pub track_id: Option<TrackId>,
    pub online_track_id: Option<ExternalTrackId>,
}

impl TrackRefBody {
    /// Reject both-or-neither before anything touches storage.
    pub fn into_track_ref(self) -> Result<TrackRef, ServerError> {
        TrackRef::from_columns(self.track_id, self.online_track_id)
            .map_err(|e| ServerError::BadRequest(e.to_string()))
    }
}
