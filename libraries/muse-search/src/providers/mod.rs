//! Built-in provider implementations.
//!
//! Each provider caps its contribution at [`RESULT_LIMIT`] hits so a
//! single upstream cannot drown out the others.

mod audius;
mod jamendo;
mod mixcloud;
mod youtube;

pub use audius::AudiusProvider;
pub use jamendo::JamendoProvider;
pub use mixcloud::MixcloudProvider;
pub use youtube::YoutubeProvider;

/// Maximum results taken from any single provider.
pub const RESULT_LIMIT: usize = 5;
