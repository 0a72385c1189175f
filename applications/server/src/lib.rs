//! Muse Server
//!
//! Multi-user music library backend: local catalog, per-user saved
//! online tracks, playlists and favorites over both, and federated
//! search across public provider APIs.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::auth::AuthService;
pub use state::AppState;
