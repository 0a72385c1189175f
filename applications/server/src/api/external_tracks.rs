/// Saved external (online) tracks API routes
use crate::{api::Pagination, error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use muse_core::{CreateExternalTrack, ExternalTrack, ExternalTrackId};

/// GET /api/online-tracks
/// List the authenticated user's saved tracks, paginated
pub async fn list_online_tracks(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<ExternalTrack>>> {
    let (limit, offset) = pagination.limit_offset();
    let tracks =
        muse_storage::external_tracks::list_for_user(&app_state.pool, auth.user_id(), limit, offset)
            .await?;
    Ok(Json(tracks))
}

/// POST /api/online-tracks
/// Save a search result; a repeated (title, source) save is a conflict
pub async fn save_online_track(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(mut req): Json<CreateExternalTrack>,
) -> Result<(StatusCode, Json<ExternalTrack>)> {
    req.user_id = auth.user_id();
    let track = muse_storage::external_tracks::create(&app_state.pool, req).await?;
    Ok((StatusCode::CREATED, Json(track)))
}

/// DELETE /api/online-tracks/:id
pub async fn delete_online_track(
    Path(id): Path<ExternalTrackId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    muse_storage::external_tracks::delete_owned(&app_state.pool, id, auth.user_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
