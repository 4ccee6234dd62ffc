//! Playback events
//!
//! Event-based communication for UI synchronization. Events are accumulated
//! by the device binding and drained by the host after each command or
//! [`pump`](crate::PlaylistNavigator::pump) call.

use crate::types::PositionCause;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use verse_core::TrackId;

/// Events emitted by the playback core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playing/paused state changed
    StateChanged {
        /// Whether audio is now playing
        playing: bool,
    },

    /// The selected track changed
    TrackChanged {
        /// ID of the new track, if any
        track_id: Option<TrackId>,
        /// ID of the previously selected track, if any
        previous_track_id: Option<TrackId>,
    },

    /// The current track played to its end
    TrackEnded,

    /// Playback position changed
    PositionChanged {
        /// New position from the start of the track
        at: Duration,
        /// Where the update came from
        cause: PositionCause,
    },

    /// Track duration became known or was reset
    DurationChanged {
        /// New duration (zero while unknown)
        duration: Duration,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume (0.0 - 1.0)
        volume: f32,
    },
}
