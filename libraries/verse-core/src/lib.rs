//! Verse Player Core
//!
//! Platform-agnostic core types and catalog access for Verse Player.
//!
//! This crate provides the foundational building blocks shared by the
//! playback core and the platform front ends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist` and their ID newtypes
//! - **Catalog Access**: the read-only `Catalog` trait and an in-memory,
//!   JSON-seeded implementation
//! - **Error Handling**: unified `VerseError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{Playlist, Track};
//!
//! // Create a track
//! let track = Track::new("My Favorite Song", "Some Artist", "https://cdn.example/song.mp3");
//!
//! // Create a playlist and add the track to it
//! let mut playlist = Playlist::new("My Favorites", "alice");
//! playlist.tracks.push(track.clone());
//!
//! assert_eq!(playlist.index_of(&track.id), Some(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::{Catalog, MemoryCatalog};
pub use error::{Result, VerseError};
pub use types::{Playlist, PlaylistId, Track, TrackId};
