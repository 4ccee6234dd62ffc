//! Device binding - state/device synchronization
//!
//! Owns the single active audio device and the playback state, and keeps the
//! two in sync. Propagation is one-directional per field: playing/paused and
//! volume always flow state -> device, while position flows state -> device
//! only for `Controller`-caused updates. Device-reported positions are
//! stored and never forwarded back, so a position tick can never turn into
//! an outgoing seek.

use crate::{
    device::{AudioBackend, AudioDevice, DeviceEvent},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    types::{PlaybackConfig, PlaybackPosition, PositionCause},
};
use std::time::Duration;
use tracing::{debug, trace};

/// Binding between the playback state and the active audio device
///
/// The binding is the only component that talks to the device. Everything
/// else issues commands here and observes the state it exposes.
pub struct DeviceBinding {
    backend: Box<dyn AudioBackend>,
    device: Option<Box<dyn AudioDevice>>,

    // State
    playing: bool,
    volume: f32,
    duration: Duration,
    position: PlaybackPosition,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl DeviceBinding {
    /// Create a binding with no source loaded
    pub fn new(backend: Box<dyn AudioBackend>, config: &PlaybackConfig) -> Self {
        Self {
            backend,
            device: None,
            playing: false,
            volume: config.volume.clamp(0.0, 1.0),
            duration: Duration::ZERO,
            position: PlaybackPosition::start(),
            pending_events: Vec::new(),
        }
    }

    // ===== Source Management =====

    /// Replace the active device with one opened for `url`
    ///
    /// The previous handle is dropped first, which detaches its event stream:
    /// a replaced device can never deliver a late `Ended`. The new device
    /// receives the stored volume and position as its initial configuration;
    /// its duration is unknown until it reports one.
    pub fn set_source(&mut self, url: &str) {
        debug!("loading source {url}");
        self.device = None;
        self.reset_duration();

        let mut device = self.backend.open(url);
        device.set_volume(self.volume);
        device.set_position(self.position.at);
        self.device = Some(device);
    }

    /// Drop the active device and return to the unloaded state
    pub fn clear_source(&mut self) {
        debug!("clearing source");
        self.device = None;
        self.reset_duration();

        if self.playing {
            self.playing = false;
            self.push_event(PlaybackEvent::StateChanged { playing: false });
        }

        self.position = PlaybackPosition {
            at: Duration::ZERO,
            cause: PositionCause::Controller,
        };
        self.push_event(PlaybackEvent::PositionChanged {
            at: Duration::ZERO,
            cause: PositionCause::Controller,
        });
    }

    fn reset_duration(&mut self) {
        if self.duration != Duration::ZERO {
            self.duration = Duration::ZERO;
            self.push_event(PlaybackEvent::DurationChanged {
                duration: Duration::ZERO,
            });
        }
    }

    // ===== Playback Control =====

    /// Request playback
    ///
    /// Idempotent: already playing means no device call and no event.
    /// A no-op while no source is loaded.
    pub fn play(&mut self) {
        let Some(device) = self.device.as_mut() else {
            debug!("play ignored, no source loaded");
            return;
        };
        if self.playing {
            return;
        }

        self.playing = true;
        device.play();
        self.push_event(PlaybackEvent::StateChanged { playing: true });
    }

    /// Request pause
    ///
    /// Idempotent, and a no-op while no source is loaded.
    pub fn pause(&mut self) {
        let Some(device) = self.device.as_mut() else {
            debug!("pause ignored, no source loaded");
            return;
        };
        if !self.playing {
            return;
        }

        self.playing = false;
        device.pause();
        self.push_event(PlaybackEvent::StateChanged { playing: false });
    }

    /// Pause and rewind to the start
    pub fn stop(&mut self) {
        self.pause();
        self.apply_controller_position(Duration::ZERO);
    }

    /// Rewind to the start and play
    pub fn restart(&mut self) {
        self.apply_controller_position(Duration::ZERO);
        self.play();
    }

    /// Seek to a position within the current track
    ///
    /// Fails without mutating anything when `position` exceeds the known
    /// duration. A negative position is unrepresentable by construction.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if position > self.duration {
            return Err(PlaybackError::SeekOutOfRange {
                requested: position,
                duration: self.duration,
            });
        }

        self.apply_controller_position(position);
        Ok(())
    }

    /// Set the volume
    ///
    /// Fails without mutating anything when `volume` is outside [0, 1].
    pub fn set_volume(&mut self, volume: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(PlaybackError::VolumeOutOfRange(volume));
        }

        self.volume = volume;
        if let Some(device) = self.device.as_mut() {
            device.set_volume(volume);
        }
        self.push_event(PlaybackEvent::VolumeChanged { volume });
        Ok(())
    }

    /// Store a controller-caused position and push it down to the device
    ///
    /// The `Controller` cause is what licenses the device write; see
    /// [`pump`](Self::pump) for the device-caused path that never writes.
    fn apply_controller_position(&mut self, at: Duration) {
        self.position = PlaybackPosition {
            at,
            cause: PositionCause::Controller,
        };
        if let Some(device) = self.device.as_mut() {
            device.set_position(at);
        }
        self.push_event(PlaybackEvent::PositionChanged {
            at,
            cause: PositionCause::Controller,
        });
    }

    // ===== Device -> State =====

    /// Drain the device's pending notifications into the state
    ///
    /// Each notification is folded into one consistent state update before
    /// the next is examined. Position notifications are stored with the
    /// `Playback` cause and are terminal: they are never forwarded back to
    /// the device.
    pub fn pump(&mut self) {
        let events = match self.device.as_mut() {
            Some(device) => device.poll_events(),
            None => return,
        };

        for event in events {
            match event {
                DeviceEvent::PositionChanged(at) => {
                    trace!("device position {at:?}");
                    self.position = PlaybackPosition {
                        at,
                        cause: PositionCause::Playback,
                    };
                    self.push_event(PlaybackEvent::PositionChanged {
                        at,
                        cause: PositionCause::Playback,
                    });
                }
                DeviceEvent::DurationKnown(duration) => {
                    debug!("device reported duration {duration:?}");
                    self.duration = duration;
                    self.push_event(PlaybackEvent::DurationChanged { duration });
                }
                DeviceEvent::Started => {
                    if !self.playing {
                        self.playing = true;
                        self.push_event(PlaybackEvent::StateChanged { playing: true });
                    }
                }
                DeviceEvent::Paused => {
                    if self.playing {
                        self.playing = false;
                        self.push_event(PlaybackEvent::StateChanged { playing: false });
                    }
                }
                DeviceEvent::Ended => {
                    debug!("track ended");
                    if self.playing {
                        self.playing = false;
                        self.push_event(PlaybackEvent::StateChanged { playing: false });
                    }
                    self.push_event(PlaybackEvent::TrackEnded);
                }
            }
        }
    }

    // ===== Events =====

    /// Take all pending events
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    pub(crate) fn push_event(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    // ===== State Queries =====

    /// Whether audio is currently playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current volume (0.0 - 1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Known track duration (zero while unknown)
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current position with its origin tag
    pub fn position(&self) -> PlaybackPosition {
        self.position
    }

    /// Whether a source is loaded
    pub fn has_source(&self) -> bool {
        self.device.is_some()
    }
}
