/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: muse_core::UserId,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /api/auth/register
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    if req.password.len() < 8 {
        return Err(ServerError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let user = muse_storage::users::create(&app_state.pool, &req.username).await?;

    let password_hash = app_state.auth_service.hash_password(&req.password)?;
    muse_storage::users::set_password_hash(&app_state.pool, user.id, &password_hash).await?;

    tracing::info!(user_id = user.id, username = %user.name, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            username: user.name,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    // Same failure for unknown user and wrong password.
    let invalid = || ServerError::Auth("Invalid username or password".to_string());

    let user = muse_storage::users::find_by_name(&app_state.pool, &req.username)
        .await?
        .ok_or_else(invalid)?;

    let password_hash = muse_storage::users::get_password_hash(&app_state.pool, user.id)
        .await?
        .ok_or_else(invalid)?;

    if !app_state
        .auth_service
        .verify_password(&req.password, &password_hash)?
    {
        return Err(invalid());
    }

    let access_token = app_state.auth_service.create_access_token(user.id)?;
    let refresh_token = app_state.auth_service.create_refresh_token(user.id)?;

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(app_state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>> {
    let user_id = app_state
        .auth_service
        .verify_refresh_token(&req.refresh_token)?;

    let access_token = app_state.auth_service.create_access_token(user_id)?;

    Ok(Json(RefreshResponse {
        access_token,
        token_type: "Bearer".to_string(),
    }))
}
