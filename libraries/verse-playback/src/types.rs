//! Core types for playback control

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Origin of a position update
///
/// Every position change is tagged with where it came from. Only
/// `Controller` updates are pushed down to the device; `Playback` updates
/// flow device -> state and stop there, which is what breaks the echo loop
/// between "device reports time T" and "controller re-seeks to T".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionCause {
    /// Reported by the device while audio is playing
    Playback,

    /// Requested by a controller (seek, stop, restart)
    Controller,
}

/// Playback position with its origin tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackPosition {
    /// Position from the start of the track
    pub at: Duration,

    /// Where this update came from
    pub cause: PositionCause,
}

impl PlaybackPosition {
    /// Position zero, as reported state (initial value)
    pub fn start() -> Self {
        Self {
            at: Duration::ZERO,
            cause: PositionCause::Playback,
        }
    }
}

/// Configuration for the playback core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0.0 - 1.0, default: 0.5)
    pub volume: f32,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 0.5,
            shuffle: false,
        }
    }
}

/// Coarse volume classification, e.g. for picking a speaker icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeLevel {
    /// Volume is exactly zero
    Muted,

    /// Below half volume
    Low,

    /// Half volume or above
    High,
}

impl VolumeLevel {
    /// Classify a volume in [0, 1]
    pub fn from_volume(volume: f32) -> Self {
        if volume <= 0.0 {
            Self::Muted
        } else if volume < 0.5 {
            Self::Low
        } else {
            Self::High
        }
    }
}
