//! Muse Core
//!
//! Domain types and error handling for the Muse music-library backend.
//!
//! This crate defines:
//! - **Catalog Types**: `Track`, `ExternalTrack`, `Artist`, `Album`, `Genre`, `Tag`
//! - **User-Scoped Types**: `Playlist`, `PlaylistItem`, `FavoriteTrack`, `User`
//! - **Track References**: the [`TrackRef`] sum type that makes the
//!   "exactly one of local/external" constraint unrepresentable as invalid data
//! - **Error Handling**: unified [`MuseError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use muse_core::types::TrackRef;
//!
//! // A playlist item or favorite references exactly one kind of track.
//! let local = TrackRef::Local(5);
//! let external = TrackRef::External(9);
//! assert_ne!(local, external);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{MuseError, Result};
pub use types::{
    Album, AlbumId, Artist, ArtistId, CreateAlbum, CreateArtist, CreateExternalTrack,
    CreateFavorite, CreatePlaylist, CreateTrack, ExternalTrack, ExternalTrackId, FavoriteId,
    FavoriteTrack, Genre, GenreId, Playlist, PlaylistId, PlaylistItem, PlaylistItemId, Tag, TagId,
    Track, TrackId, TrackRef, UpdateTrack, User, UserId,
};
