/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// The track order is significant: it is the traversal order used for
/// sequential playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Owner display name
    pub owner: String,

    /// Cover artwork location
    pub artwork_url: String,

    /// Ordered tracks (traversal order)
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            title: title.into(),
            description: String::new(),
            owner: owner.into(),
            artwork_url: String::new(),
            tracks: Vec::new(),
        }
    }

    /// Number of tracks in the playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Find a track by its ID
    pub fn track_by_id(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| &track.id == id)
    }

    /// Position of a track within the playlist
    pub fn index_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|track| &track.id == id)
    }
}
