/// Favorites API routes
use crate::{
    api::TrackRefBody,
    error::Result,
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use muse_core::{CreateFavorite, FavoriteTrack};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UnfavoriteResponse {
    pub removed_count: u64,
}

/// GET /api/favorites
pub async fn list_favorites(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<FavoriteTrack>>> {
    let favorites =
        muse_storage::favorites::list_for_user(&app_state.pool, auth.user_id()).await?;
    Ok(Json(favorites))
}

/// POST /api/favorites
/// Favorite a local or external track; duplicates are a conflict
pub async fn favorite(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<TrackRefBody>,
) -> Result<(StatusCode, Json<FavoriteTrack>)> {
    let track_ref = req.into_track_ref()?;
    let favorite = muse_storage::favorites::create(
        &app_state.pool,
        CreateFavorite {
            user_id: auth.user_id(),
            track_ref,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/favorites
/// Unfavorite by track reference; absent favorites are a no-op
pub async fn unfavorite(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<TrackRefBody>,
) -> Result<Json<UnfavoriteResponse>> {
    let track_ref = req.into_track_ref()?;
    let removed_count =
        muse_storage::favorites::remove(&app_state.pool, auth.user_id(), track_ref).await?;
    Ok(Json(UnfavoriteResponse { removed_count }))
}
