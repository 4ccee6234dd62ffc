//! Error types for playback control

use std::time::Duration;
use thiserror::Error;

/// Playback errors
///
/// These are input-validation failures raised before any state is mutated.
/// Commands issued with no source loaded are not errors; they degrade to
/// no-ops so callers need no special casing.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Requested seek position lies beyond the known track duration
    #[error("Seek position {requested:?} must be between zero and track duration {duration:?}")]
    SeekOutOfRange {
        /// The rejected position
        requested: Duration,
        /// The duration it was validated against
        duration: Duration,
    },

    /// Requested volume lies outside [0, 1]
    #[error("Volume must be between 0 and 1, got {0}")]
    VolumeOutOfRange(f32),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
