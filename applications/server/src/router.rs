/// Router assembly, shared between the binary and the integration
/// tests.
use crate::{api, middleware, services::AuthService, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_router(app_state: AppState, auth_service: Arc<AuthService>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/refresh", post(api::auth::refresh));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        // Local catalog tracks
        .route("/tracks", get(api::tracks::list_tracks))
        .route("/tracks", post(api::tracks::create_track))
        .route("/tracks/:id", get(api::tracks::get_track))
        .route("/tracks/:id", put(api::tracks::update_track))
        .route("/tracks/:id", delete(api::tracks::delete_track))
        // Saved online tracks
        .route(
            "/online-tracks",
            get(api::external_tracks::list_online_tracks),
        )
        .route(
            "/online-tracks",
            post(api::external_tracks::save_online_track),
        )
        .route(
            "/online-tracks/:id",
            delete(api::external_tracks::delete_online_track),
        )
        // Playlists
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists", post(api::playlists::create_playlist))
        .route("/playlists/:id", delete(api::playlists::delete_playlist))
        .route("/playlists/:id/items", get(api::playlists::list_items))
        .route("/playlists/:id/add_track", post(api::playlists::add_track))
        .route(
            "/playlists/:id/remove_track",
            post(api::playlists::remove_track),
        )
        // Favorites
        .route("/favorites", get(api::favorites::list_favorites))
        .route("/favorites", post(api::favorites::favorite))
        .route("/favorites", delete(api::favorites::unfavorite))
        // Shared reference entities
        .route("/artists", get(api::catalog::list_artists))
        .route("/artists", post(api::catalog::create_artist))
        .route("/albums", get(api::catalog::list_albums))
        .route("/albums", post(api::catalog::create_album))
        .route("/genres", get(api::catalog::list_genres))
        .route("/genres", post(api::catalog::create_genre))
        .route("/tags", get(api::catalog::list_tags))
        .route("/tags", post(api::catalog::create_tag))
        // Federated search
        .route("/search", get(api::search::search))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
