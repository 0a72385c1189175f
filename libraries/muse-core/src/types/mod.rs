mod album;
mod artist;
mod external_track;
mod favorite;
mod genre;
mod ids;
mod playlist;
mod tag;
mod track;
mod track_ref;
mod user;

pub use album::{Album, CreateAlbum};
pub use artist::{Artist, CreateArtist};
pub use external_track::{CreateExternalTrack, ExternalTrack};
pub use favorite::{CreateFavorite, FavoriteTrack};
pub use genre::Genre;
pub use ids::{
    AlbumId, ArtistId, ExternalTrackId, FavoriteId, GenreId, PlaylistId, PlaylistItemId, TagId,
    TrackId, UserId,
};
pub use playlist::{CreatePlaylist, Playlist, PlaylistItem};
pub use tag::Tag;
pub use track::{CreateTrack, Track, UpdateTrack};
pub use track_ref::TrackRef;
pub use user::User;
