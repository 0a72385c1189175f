/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use muse_search::{SearchAggregator, SearchProvider, SearchResult};
use muse_server::{create_router, services::AuthService, state::AppState};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

/// Build a test app over a real on-disk SQLite database and an empty
/// provider list.
pub async fn create_test_app() -> TestApp {
    create_test_app_with_providers(Vec::new()).await
}

/// Build a test app with the given search providers registered.
pub async fn create_test_app_with_providers(
    providers: Vec<Arc<dyn SearchProvider>>,
) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = muse_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    muse_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let auth_service = Arc::new(AuthService::new(
        "test-secret-key".to_string(),
        1, // 1 hour access
        1, // 1 day refresh
    ));

    let search = Arc::new(SearchAggregator::new(providers));

    let app_state = AppState::new(pool.clone(), Arc::clone(&auth_service), search);
    let router = create_router(app_state, auth_service);

    TestApp {
        router,
        pool,
        _temp_dir: temp_dir,
    }
}

/// Register a user through the API and log them in, returning the
/// access token.
pub async fn register_and_login(app: &TestApp, username: &str) -> String {
    let response = send_json(
        app,
        "POST",
        "/api/auth/register",
        None,
        serde_json::json!({ "username": username, "password": "Password123!" }),
    )
    .await;
    assert_eq!(response.0, StatusCode::CREATED, "register failed: {:?}", response.1);

    let (status, body) = send_json(
        app,
        "POST",
        "/api/auth/login",
        None,
        serde_json::json!({ "username": username, "password": "Password123!" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body:?}");

    body["access_token"]
        .as_str()
        .expect("login response carries access_token")
        .to_string()
}

/// Fire a JSON request at the test router and parse the JSON response.
pub async fn send_json(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = builder
        .body(Body::from(serde_json::to_string(&body).expect("serializable body")))
        .expect("valid request");

    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("router call");
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let value = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).expect("JSON body")
    };

    (status, value)
}

/// Fire a bodyless GET/DELETE request.
pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = builder.body(Body::empty()).expect("valid request");

    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("router call");
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let value = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).expect("JSON body")
    };

    (status, value)
}

/// A canned in-process provider for search endpoint tests.
pub struct StaticProvider {
    pub name: &'static str,
    pub results: Vec<SearchResult>,
    pub fail: bool,
}

#[axum::async_trait]
impl SearchProvider for StaticProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn search(&self, _query: &str) -> muse_search::Result<Vec<SearchResult>> {
        if self.fail {
            return Err(muse_search::SearchError::Status(500));
        }
        Ok(self.results.clone())
    }
}
