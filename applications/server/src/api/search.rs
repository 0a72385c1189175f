/// Federated search API route
use crate::{error::{Result, ServerError}, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use muse_search::SearchResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// GET /api/search?q=
/// Fan the query out to every configured provider; a provider failure
/// or timeout never fails the request
pub async fn search(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Query parameter is required".to_string()))?;

    let results = app_state.search.search(q).await;
    Ok(Json(SearchResponse { results }))
}
