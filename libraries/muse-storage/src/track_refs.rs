//! Shared validation for tagged track references.
//!
//! Playlist items and favorites both reference a track through
//! [`TrackRef`]; before creating either, the referenced entity must
//! exist and, for external tracks, belong to the acting user. Local
//! catalog tracks are shared for read purposes, so any authenticated
//! user may reference one.

use muse_core::{MuseError, Result, TrackRef, UserId};
use sqlx::{Row, SqlitePool};

/// Validate that `track_ref` may be attached to a user-scoped record
/// owned by `actor`.
pub(crate) async fn ensure_addable(
    pool: &SqlitePool,
    track_ref: TrackRef,
    actor: UserId,
) -> Result<()> {
    match track_ref {
        TrackRef::Local(track_id) => {
            let exists = sqlx::query("SELECT 1 FROM tracks WHERE id = ?")
                .bind(track_id)
                .fetch_optional(pool)
                .await?
                .is_some();
            if exists {
                Ok(())
            } else {
                Err(MuseError::not_found("Track", track_id))
            }
        }
        TrackRef::External(external_track_id) => {
            let owner = sqlx::query("SELECT user_id FROM external_tracks WHERE id = ?")
                .bind(external_track_id)
                .fetch_optional(pool)
                .await?
                .map(|row| row.get::<UserId, _>("user_id"));
            match owner {
                None => Err(MuseError::not_found("External track", external_track_id)),
                Some(owner) if owner != actor => Err(MuseError::PermissionDenied),
                Some(_) => Ok(()),
            }
        }
    }
}
