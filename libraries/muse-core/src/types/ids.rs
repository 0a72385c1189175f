//! ID types for Muse entities
//!
//! All entities use SQLite rowid-backed integer identifiers.

pub type UserId = i64;
pub type TrackId = i64;
pub type ExternalTrackId = i64;
pub type PlaylistId = i64;
pub type PlaylistItemId = i64;
pub type FavoriteId = i64;
pub type ArtistId = i64;
pub type AlbumId = i64;
pub type GenreId = i64;
pub type TagId = i64;
