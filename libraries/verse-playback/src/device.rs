//! Platform-agnostic audio device trait
//!
//! Abstracts the host platform's audio-output primitive. The playback core
//! assumes exactly one device is active at a time and that a dropped handle
//! can no longer produce events.

use std::time::Duration;

/// Notification produced by an audio device
///
/// Devices buffer notifications internally; the binding drains them on each
/// [`AudioDevice::poll_events`] call. The pull model replaces the callback
/// registration a browser audio element would use: replacing the device
/// drops the old handle, so a stale device can never deliver a late `Ended`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// Playback progressed to this position
    PositionChanged(Duration),

    /// The device determined the total track duration
    DurationKnown(Duration),

    /// Playback started (possibly triggered outside the core, e.g. OS media
    /// keys)
    Started,

    /// Playback paused (possibly triggered outside the core)
    Paused,

    /// The track played to its end
    Ended,
}

/// Controllable, positionable, single-stream audio output
///
/// Implementors accept commands immediately and report actual progress via
/// [`AudioDevice::poll_events`]; no command blocks on device-side completion.
pub trait AudioDevice {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Move the play head
    fn set_position(&mut self, position: Duration);

    /// Set the output volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);

    /// Drain pending notifications
    fn poll_events(&mut self) -> Vec<DeviceEvent>;
}

/// Opens audio devices for source locators
///
/// The platform decides what a locator means (file path, URL, asset id) and
/// returns a fresh device per source, mirroring how a browser front end
/// would construct one audio element per URL.
pub trait AudioBackend {
    /// Open a device for the given source locator
    fn open(&mut self, url: &str) -> Box<dyn AudioDevice>;
}

/// Inert device for tests
///
/// Accepts every command and never reports anything.
#[cfg(test)]
pub(crate) struct NullDevice;

#[cfg(test)]
impl AudioDevice for NullDevice {
    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn set_position(&mut self, _position: Duration) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn poll_events(&mut self) -> Vec<DeviceEvent> {
        Vec::new()
    }
}

/// Backend producing [`NullDevice`]s for tests
#[cfg(test)]
pub(crate) struct NullBackend;

#[cfg(test)]
impl AudioBackend for NullBackend {
    fn open(&mut self, _url: &str) -> Box<dyn AudioDevice> {
        Box::new(NullDevice)
    }
}
