//! Track controller
//!
//! Owns "what track is selected" and its derived display state, and
//! delegates every playback command to the device binding. Tolerant of
//! having no track: delegated commands degrade to the binding's no-op
//! behavior.

use crate::{
    binding::DeviceBinding,
    error::Result,
    events::PlaybackEvent,
    types::{PlaybackPosition, VolumeLevel},
};
use std::time::Duration;
use tracing::debug;
use verse_core::Track;

/// Controller for single-track playback
pub struct TrackController {
    binding: DeviceBinding,
    current: Option<Track>,
}

impl TrackController {
    /// Create a controller with no track selected
    pub fn new(binding: DeviceBinding) -> Self {
        Self {
            binding,
            current: None,
        }
    }

    // ===== Track Selection =====

    /// Select a track, or `None` to unload
    ///
    /// A selected track is loaded paused at position zero; playback must be
    /// requested explicitly afterwards. Selecting the track that is already
    /// current reloads it the same way.
    pub fn select_track(&mut self, track: Option<Track>) {
        let previous_track_id = self.current.as_ref().map(|t| t.id.clone());

        match &track {
            Some(track) => {
                debug!("selecting track {} ({})", track.id, track.title);
                self.binding.set_source(&track.audio_url);
                self.binding.stop();
            }
            None => {
                debug!("deselecting track");
                self.binding.clear_source();
            }
        }

        let track_id = track.as_ref().map(|t| t.id.clone());
        self.current = track;
        self.binding.push_event(PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
    }

    /// Currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    // ===== Playback Control (delegation) =====

    /// Request playback
    pub fn play(&mut self) {
        self.binding.play();
    }

    /// Request pause
    pub fn pause(&mut self) {
        self.binding.pause();
    }

    /// Pause and rewind to the start
    pub fn stop(&mut self) {
        self.binding.stop();
    }

    /// Rewind to the start and play
    pub fn restart(&mut self) {
        self.binding.restart();
    }

    /// Seek within the current track
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        self.binding.seek(position)
    }

    /// Set the volume
    pub fn set_volume(&mut self, volume: f32) -> Result<()> {
        self.binding.set_volume(volume)
    }

    // ===== State Queries =====

    /// Whether audio is currently playing
    pub fn is_playing(&self) -> bool {
        self.binding.is_playing()
    }

    /// Current volume (0.0 - 1.0)
    pub fn volume(&self) -> f32 {
        self.binding.volume()
    }

    /// Coarse classification of the current volume
    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::from_volume(self.binding.volume())
    }

    /// Known track duration (zero while unknown)
    pub fn duration(&self) -> Duration {
        self.binding.duration()
    }

    /// Current position with its origin tag
    pub fn position(&self) -> PlaybackPosition {
        self.binding.position()
    }

    /// Current position as `mm:ss`
    pub fn position_text(&self) -> String {
        format_time(self.binding.position().at)
    }

    /// Track duration as `mm:ss` (`00:00` while unknown)
    pub fn duration_text(&self) -> String {
        format_time(self.binding.duration())
    }

    // ===== Binding Access =====

    /// The underlying device binding
    pub fn binding(&self) -> &DeviceBinding {
        &self.binding
    }

    /// Mutable access to the underlying device binding
    pub fn binding_mut(&mut self) -> &mut DeviceBinding {
        &mut self.binding
    }
}

/// Format a duration as zero-padded `mm:ss`
fn format_time(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
