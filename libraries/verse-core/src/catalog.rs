//! Read-only catalog access
//!
//! The catalog is a lookup collaborator: the playback core reads tracks and
//! playlists from it and never writes back. Lookups are synchronous and an
//! unknown ID is simply absent, never an error.

use crate::error::Result;
use crate::types::{Playlist, PlaylistId, Track, TrackId};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// Read-only lookup of tracks and playlists
pub trait Catalog {
    /// Get a track by ID
    fn track(&self, id: &TrackId) -> Option<Track>;

    /// Get a playlist by ID
    fn playlist(&self, id: &PlaylistId) -> Option<Playlist>;

    /// Get all playlists
    fn playlists(&self) -> Vec<Playlist>;
}

/// Seed entry for a playlist, referencing its tracks by ID
#[derive(Debug, Deserialize)]
struct PlaylistSeed {
    id: PlaylistId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    artwork_url: String,
    tracks: Vec<TrackId>,
}

/// Seed format for [`MemoryCatalog::from_json`]
#[derive(Debug, Deserialize)]
struct CatalogSeed {
    tracks: Vec<Track>,
    #[serde(default)]
    playlists: Vec<PlaylistSeed>,
}

/// In-memory catalog
///
/// Holds fully resolved tracks and playlists. Intended to be seeded once at
/// startup from bundled JSON data.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
}

impl MemoryCatalog {
    /// Create a catalog from already resolved entities
    pub fn new(tracks: Vec<Track>, playlists: Vec<Playlist>) -> Self {
        Self { tracks, playlists }
    }

    /// Load a catalog from JSON seed data
    ///
    /// Playlists reference tracks by ID. Entries pointing at unknown tracks
    /// are skipped so a stale reference cannot poison navigation.
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: CatalogSeed = serde_json::from_str(json)?;

        let by_id: HashMap<&TrackId, &Track> =
            seed.tracks.iter().map(|track| (&track.id, track)).collect();

        let playlists = seed
            .playlists
            .iter()
            .map(|playlist| {
                let tracks = playlist
                    .tracks
                    .iter()
                    .filter_map(|track_id| match by_id.get(track_id) {
                        Some(track) => Some((*track).clone()),
                        None => {
                            warn!(
                                "playlist {} references unknown track {}, skipping",
                                playlist.id, track_id
                            );
                            None
                        }
                    })
                    .collect();

                Playlist {
                    id: playlist.id.clone(),
                    title: playlist.title.clone(),
                    description: playlist.description.clone(),
                    owner: playlist.owner.clone(),
                    artwork_url: playlist.artwork_url.clone(),
                    tracks,
                }
            })
            .collect();

        Ok(Self {
            tracks: seed.tracks,
            playlists,
        })
    }

    /// All tracks in the catalog
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl Catalog for MemoryCatalog {
    fn track(&self, id: &TrackId) -> Option<Track> {
        self.tracks.iter().find(|track| &track.id == id).cloned()
    }

    fn playlist(&self, id: &PlaylistId) -> Option<Playlist> {
        self.playlists
            .iter()
            .find(|playlist| &playlist.id == id)
            .cloned()
    }

    fn playlists(&self) -> Vec<Playlist> {
        self.playlists.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"{
        "tracks": [
            {
                "id": "t1",
                "title": "First",
                "artist": "Alpha",
                "artwork_url": "https://cdn.test/t1.png",
                "duration_ms": 180000,
                "audio_url": "https://cdn.test/t1.mp3"
            },
            {
                "id": "t2",
                "title": "Second",
                "artist": "Beta",
                "artwork_url": "https://cdn.test/t2.png",
                "audio_url": "https://cdn.test/t2.mp3"
            }
        ],
        "playlists": [
            {
                "id": "p1",
                "title": "Morning Mix",
                "description": "Wake up",
                "owner": "alice",
                "artwork_url": "https://cdn.test/p1.png",
                "tracks": ["t1", "t2", "t-gone"]
            }
        ]
    }"#;

    #[test]
    fn loads_tracks_and_playlists() {
        let catalog = MemoryCatalog::from_json(SEED).unwrap();

        assert_eq!(catalog.tracks().len(), 2);

        let track = catalog.track(&TrackId::new("t1")).unwrap();
        assert_eq!(track.title, "First");
        assert_eq!(track.duration_ms, Some(180_000));

        // duration omitted in seed data stays unknown
        let track = catalog.track(&TrackId::new("t2")).unwrap();
        assert!(track.duration_ms.is_none());
    }

    #[test]
    fn resolves_playlist_tracks_in_order() {
        let catalog = MemoryCatalog::from_json(SEED).unwrap();

        let playlist = catalog.playlist(&PlaylistId::new("p1")).unwrap();
        assert_eq!(playlist.title, "Morning Mix");

        let ids: Vec<&str> = playlist.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]); // unknown "t-gone" skipped
    }

    #[test]
    fn unknown_ids_are_absent() {
        let catalog = MemoryCatalog::from_json(SEED).unwrap();

        assert!(catalog.track(&TrackId::new("nope")).is_none());
        assert!(catalog.playlist(&PlaylistId::new("nope")).is_none());
    }

    #[test]
    fn malformed_seed_is_an_error() {
        assert!(MemoryCatalog::from_json("{ not json").is_err());
    }

    #[test]
    fn lists_all_playlists() {
        let catalog = MemoryCatalog::from_json(SEED).unwrap();
        assert_eq!(catalog.playlists().len(), 1);
    }
}
