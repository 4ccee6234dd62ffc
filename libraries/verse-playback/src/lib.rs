//! Verse Player - Playback Control
//!
//! Platform-agnostic playback control for Verse Player.
//!
//! This crate provides:
//! - Device binding (state/device synchronization with cause-tagged
//!   positions)
//! - Track selection and derived display state (`mm:ss` texts, volume
//!   classification)
//! - Playlist navigation (sequential and shuffled, with play history)
//! - Auto-advance on track end
//! - Playback events for UI synchronization
//!
//! # Architecture
//!
//! `verse-playback` is completely platform-agnostic: the host provides the
//! audio primitive through the [`AudioBackend`]/[`AudioDevice`] traits and
//! pumps device notifications into the core. Only the [`DeviceBinding`]
//! talks to the device; the controller and navigator interact purely through
//! its state surface.
//!
//! The central synchronization rule: playing/paused and volume always
//! propagate state -> device, while position propagates only when an update
//! was caused by a controller. Device-reported positions are stored with the
//! [`PositionCause::Playback`] tag and never pushed back down, which is what
//! prevents the echo loop between "device reports time T" and "controller
//! re-seeks to T".
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use verse_core::Playlist;
//! use verse_playback::{
//!     AudioBackend, AudioDevice, DeviceBinding, DeviceEvent, PlaybackConfig,
//!     PlaylistNavigator, TrackController,
//! };
//!
//! // Implement the device seam for your platform
//! struct SilentDevice;
//!
//! impl AudioDevice for SilentDevice {
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn set_position(&mut self, _position: Duration) {}
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn poll_events(&mut self) -> Vec<DeviceEvent> {
//!         Vec::new()
//!     }
//! }
//!
//! struct SilentBackend;
//!
//! impl AudioBackend for SilentBackend {
//!     fn open(&mut self, _url: &str) -> Box<dyn AudioDevice> {
//!         Box::new(SilentDevice)
//!     }
//! }
//!
//! // Wire up the core
//! let config = PlaybackConfig::default();
//! let binding = DeviceBinding::new(Box::new(SilentBackend), &config);
//! let controller = TrackController::new(binding);
//! let mut navigator = PlaylistNavigator::new(controller, &config);
//!
//! // Select a playlist and start playing
//! let playlist = Playlist::new("My Favorites", "alice");
//! navigator.select_playlist(Some(playlist), None, true);
//!
//! // Host loop: pump device notifications, hand events to the UI
//! for _event in navigator.pump() {
//!     // update the UI
//! }
//! ```

mod binding;
mod controller;
mod device;
mod error;
mod events;
mod history;
mod navigator;
mod shuffle;
pub mod types;

// Public exports
pub use binding::DeviceBinding;
pub use controller::TrackController;
pub use device::{AudioBackend, AudioDevice, DeviceEvent};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use navigator::PlaylistNavigator;
pub use types::{PlaybackConfig, PlaybackPosition, PositionCause, VolumeLevel};
