/// Playlists API routes
use crate::{
    api::TrackRefBody,
    error::Result,
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use muse_core::{CreatePlaylist, Playlist, PlaylistId, PlaylistItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RemoveTrackResponse {
    pub removed_count: u64,
}

/// GET /api/playlists
/// List the authenticated user's playlists
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = muse_storage::playlists::list_for_user(&app_state.pool, auth.user_id()).await?;
    Ok(Json(playlists))
}

/// POST /api/playlists
/// Create a new playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<Playlist>)> {
    let playlist = muse_storage::playlists::create(
        &app_state.pool,
        CreatePlaylist {
            name: req.name,
            owner_id: auth.user_id(),
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /api/playlists/:id/items
/// List a playlist's items in insertion order
pub async fn list_items(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<PlaylistItem>>> {
    let items = muse_storage::playlists::items(&app_state.pool, id, auth.user_id()).await?;
    Ok(Json(items))
}

/// POST /api/playlists/:id/add_track
/// Add a local or external track reference to a playlist
pub async fn add_track(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<TrackRefBody>,
) -> Result<(StatusCode, Json<PlaylistItem>)> {
    let track_ref = req.into_track_ref()?;
    let item =
        muse_storage::playlists::add_track(&app_state.pool, id, track_ref, auth.user_id()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// POST /api/playlists/:id/remove_track
/// Remove a track reference; absent references report a zero count
pub async fn remove_track(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<TrackRefBody>,
) -> Result<Json<RemoveTrackResponse>> {
    let track_ref = req.into_track_ref()?;
    let removed_count =
        muse_storage::playlists::remove_track(&app_state.pool, id, track_ref, auth.user_id())
            .await?;
    Ok(Json(RemoveTrackResponse { removed_count }))
}

/// DELETE /api/playlists/:id
pub async fn delete_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    muse_storage::playlists::delete(&app_state.pool, id, auth.user_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
