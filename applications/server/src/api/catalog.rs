/// Shared reference entities: artists, albums, genres, tags
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use muse_core::{Album, Artist, CreateAlbum, CreateArtist, Genre, Tag};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateNamedRequest {
    pub name: String,
}

/// GET /api/artists
pub async fn list_artists(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Vec<Artist>>> {
    Ok(Json(muse_storage::artists::get_all(&app_state.pool).await?))
}

/// POST /api/artists
pub async fn create_artist(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(req): Json<CreateArtist>,
) -> Result<(StatusCode, Json<Artist>)> {
    let artist = muse_storage::artists::create(&app_state.pool, req).await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

/// GET /api/albums
pub async fn list_albums(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Vec<Album>>> {
    Ok(Json(muse_storage::albums::get_all(&app_state.pool).await?))
}

/// POST /api/albums
pub async fn create_album(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(req): Json<CreateAlbum>,
) -> Result<(StatusCode, Json<Album>)> {
    let album = muse_storage::albums::create(&app_state.pool, req).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /api/genres
pub async fn list_genres(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Vec<Genre>>> {
    Ok(Json(muse_storage::genres::get_all(&app_state.pool).await?))
}

/// POST /api/genres
pub async fn create_genre(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(req): Json<CreateNamedRequest>,
) -> Result<(StatusCode, Json<Genre>)> {
    let genre = muse_storage::genres::create(&app_state.pool, &req.name).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /api/tags
pub async fn list_tags(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Vec<Tag>>> {
    Ok(Json(muse_storage::tags::get_all(&app_state.pool).await?))
}

/// POST /api/tags
pub async fn create_tag(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(req): Json<CreateNamedRequest>,
) -> Result<(StatusCode, Json<Tag>)> {
    let tag = muse_storage::tags::create(&app_state.pool, &req.name).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}
