/// Shared application state
use crate::services::AuthService;
use muse_search::SearchAggregator;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub search: Arc<SearchAggregator>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        auth_service: Arc<AuthService>,
        search: Arc<SearchAggregator>,
    ) -> Self {
        Self {
            pool,
            auth_service,
            search,
        }
    }
}
