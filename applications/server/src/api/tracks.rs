/// Local catalog tracks API routes
use crate::{api::Pagination, error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use muse_core::{CreateTrack, Track, TrackId, UpdateTrack};
use muse_storage::tracks::TrackFilter;
use serde::Deserialize;

// Pagination fields are inlined rather than flattened: the urlencoded
// deserializer cannot handle numeric fields behind serde(flatten).
#[derive(Debug, Default, Deserialize)]
pub struct ListTracksQuery {
    pub genre: Option<String>,
    pub tag: Option<String>,
    pub uploaded_by: Option<muse_core::UserId>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// GET /api/tracks
/// List the shared catalog, filtered and paginated
pub async fn list_tracks(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<ListTracksQuery>,
) -> Result<Json<Vec<Track>>> {
    let filter = TrackFilter {
        genre: query.genre,
        tag: query.tag,
        uploaded_by: query.uploaded_by,
    };
    let pagination = Pagination {
        page: query.page,
        page_size: query.page_size,
    };
    let (limit, offset) = pagination.limit_offset();
    let tracks = muse_storage::tracks::list(&app_state.pool, &filter, limit, offset).await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/:id
pub async fn get_track(
    Path(id): Path<TrackId>,
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Track>> {
    let track = muse_storage::tracks::get_by_id(&app_state.pool, id)
        .await?
        .ok_or_else(|| muse_core::MuseError::not_found("Track", id))?;
    Ok(Json(track))
}

/// POST /api/tracks
/// Add a track to the shared catalog, owned by the uploader
pub async fn create_track(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(mut req): Json<CreateTrack>,
) -> Result<(StatusCode, Json<Track>)> {
    req.uploaded_by = Some(auth.user_id());
    let track = muse_storage::tracks::create(&app_state.pool, req).await?;
    Ok((StatusCode::CREATED, Json(track)))
}

/// PUT /api/tracks/:id
/// Update track metadata; uploader only
pub async fn update_track(
    Path(id): Path<TrackId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UpdateTrack>,
) -> Result<Json<Track>> {
    let track = muse_storage::tracks::update(&app_state.pool, id, auth.user_id(), req).await?;
    Ok(Json(track))
}

/// DELETE /api/tracks/:id
/// Delete a track; uploader only, cascades to playlist items and
/// favorites
pub async fn delete_track(
    Path(id): Path<TrackId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    muse_storage::tracks::delete(&app_state.pool, id, auth.user_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
