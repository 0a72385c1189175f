//! Tagged track references
//!
//! Playlist items and favorites reference exactly one of
//! {local track, external track}. Modeling the reference as a sum type
//! removes the both-set and neither-set states at the type level; the
//! storage layer keeps a CHECK constraint as backstop for the flattened
//! two-column representation.

use serde::{Deserialize, Serialize};

use super::ids::{ExternalTrackId, TrackId};
use crate::error::{MuseError, Result};

/// Reference to either a local catalog track or a saved external track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackRef {
    /// Local catalog entry backed by an uploaded audio file
    Local(TrackId),
    /// Track backed by a third-party stream URL discovered via search
    External(ExternalTrackId),
}

impl TrackRef {
    /// Reconstruct a reference from the flattened two-column form.
    ///
    /// Fails when both or neither column is set, which can only happen
    /// for input that bypassed this type (e.g. a raw API payload).
    pub fn from_columns(
        track_id: Option<TrackId>,
        external_track_id: Option<ExternalTrackId>,
    ) -> Result<Self> {
        match (track_id, external_track_id) {
            (Some(id), None) => Ok(Self::Local(id)),
            (None, Some(id)) => Ok(Self::External(id)),
            (Some(_), Some(_)) => Err(MuseError::InvalidReference(
                "both a local track and an external track were referenced".to_string(),
            )),
            (None, None) => Err(MuseError::InvalidReference(
                "neither a local track nor an external track was referenced".to_string(),
            )),
        }
    }

    /// Flatten into the two-column relational form.
    pub fn into_columns(self) -> (Option<TrackId>, Option<ExternalTrackId>) {
        match self {
            Self::Local(id) => (Some(id), None),
            Self::External(id) => (None, Some(id)),
        }
    }

    /// True for references to local catalog tracks
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// True for references to saved external tracks
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl std::fmt::Display for TrackRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(id) => write!(f, "track {id}"),
            Self::External(id) => write!(f, "external track {id}"),
        }
    }
}
