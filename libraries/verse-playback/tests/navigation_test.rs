//! Playlist navigation scenarios
//!
//! End-to-end traversal behavior: sequential order, shuffle exhaustion,
//! history walk-back, and the track-swap rules.

use std::collections::HashSet;
use std::time::Duration;
use verse_core::{Playlist, Track, TrackId};
use verse_playback::{
    AudioBackend, AudioDevice, DeviceBinding, DeviceEvent, PlaybackConfig, PlaylistNavigator,
    PositionCause, TrackController, VolumeLevel,
};

// ===== Test Helpers =====

/// Device that accepts everything and reports nothing
struct InertDevice;

impl AudioDevice for InertDevice {
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn set_position(&mut self, _position: Duration) {}
    fn set_volume(&mut self, _volume: f32) {}
    fn poll_events(&mut self) -> Vec<DeviceEvent> {
        Vec::new()
    }
}

struct InertBackend;

impl AudioBackend for InertBackend {
    fn open(&mut self, _url: &str) -> Box<dyn AudioDevice> {
        Box::new(InertDevice)
    }
}

fn navigator(shuffle: bool) -> PlaylistNavigator {
    let config = PlaybackConfig {
        shuffle,
        ..PlaybackConfig::default()
    };
    let binding = DeviceBinding::new(Box::new(InertBackend), &config);
    PlaylistNavigator::new(TrackController::new(binding), &config)
}

fn playlist(track_ids: &[&str]) -> Playlist {
    let mut playlist = Playlist::new("Scenario", "tester");
    for id in track_ids {
        let mut track = Track::new(
            format!("Track {id}"),
            "Artist",
            format!("https://cdn.test/{id}.mp3"),
        );
        track.id = TrackId::new(*id);
        playlist.tracks.push(track);
    }
    playlist
}

fn current_id(navigator: &PlaylistNavigator) -> Option<&str> {
    navigator
        .controller()
        .current_track()
        .map(|track| track.id.as_str())
}

// ===== Scenarios =====

#[test]
fn sequential_traversal_and_walk_back() {
    let mut navigator = navigator(false);
    navigator.select_playlist(Some(playlist(&["a", "b", "c"])), None, true);
    assert_eq!(current_id(&navigator), Some("a"));

    navigator.play_next();
    assert_eq!(current_id(&navigator), Some("b"));
    navigator.play_next();
    assert_eq!(current_id(&navigator), Some("c"));
    navigator.play_next();
    assert_eq!(current_id(&navigator), Some("c")); // clamped, no wraparound

    navigator.play_previous();
    assert_eq!(current_id(&navigator), Some("b"));
    navigator.play_previous();
    assert_eq!(current_id(&navigator), Some("a"));
}

#[test]
fn sequential_visits_indices_in_order() {
    let mut navigator = navigator(false);
    navigator.select_playlist(Some(playlist(&["a", "b", "c", "d", "e"])), None, true);

    let mut visited = vec![navigator.current_index()];
    for _ in 0..4 {
        navigator.play_next();
        visited.push(navigator.current_index());
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
}

#[test]
fn shuffle_covers_the_playlist_before_any_repeat() {
    let n = 8;
    let ids: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

    let mut navigator = navigator(true);
    navigator.select_playlist(Some(playlist(&id_refs)), None, true);

    let mut seen = HashSet::new();
    seen.insert(navigator.current_index());

    for _ in 0..n - 1 {
        navigator.play_next();
        assert!(
            seen.insert(navigator.current_index()),
            "repeat before exhaustion"
        );
    }
    assert_eq!(seen.len(), n);

    // the playlist is exhausted; the next advance resets the history and
    // repeats become possible again
    navigator.play_next();
    assert!(navigator.played_indices().len() < n);
}

#[test]
fn shuffle_previous_replays_history_back_to_the_first_track() {
    let mut navigator = navigator(true);
    navigator.select_playlist(Some(playlist(&["a", "b", "c", "d", "e"])), None, true);

    let mut played_order = vec![navigator.current_index()];
    for _ in 0..3 {
        navigator.play_next();
        played_order.push(navigator.current_index());
    }

    // walk the stack back
    navigator.play_previous();
    assert_eq!(navigator.current_index(), played_order[2]);
    navigator.play_previous();
    assert_eq!(navigator.current_index(), played_order[1]);
    navigator.play_previous();
    assert_eq!(navigator.current_index(), played_order[0]);

    // history drained: previous now lands on the first track
    navigator.play_previous();
    assert_eq!(navigator.current_index(), 0);
}

#[test]
fn volume_scenario() {
    let mut navigator = navigator(false);
    navigator.select_playlist(Some(playlist(&["a"])), None, false);

    assert!(navigator.controller_mut().set_volume(1.4).is_err());
    // the failed call left the default untouched
    assert_eq!(navigator.controller().volume(), 0.5);

    navigator.controller_mut().set_volume(0.3).unwrap();
    assert_eq!(navigator.controller().volume_level(), VolumeLevel::Low);

    navigator.controller_mut().set_volume(0.0).unwrap();
    assert_eq!(navigator.controller().volume_level(), VolumeLevel::Muted);

    navigator.controller_mut().set_volume(0.7).unwrap();
    assert_eq!(navigator.controller().volume_level(), VolumeLevel::High);
}

#[test]
fn swapping_tracks_mid_playback_loads_paused_at_zero() {
    let mut navigator = navigator(false);
    let list = playlist(&["a", "b"]);
    let second = list.tracks[1].clone();
    navigator.select_playlist(Some(list), None, true);
    assert!(navigator.controller().is_playing());

    navigator.controller_mut().select_track(Some(second));

    assert_eq!(current_id(&navigator), Some("b"));
    assert!(!navigator.controller().is_playing());
    assert_eq!(navigator.controller().position().at, Duration::ZERO);
    assert_eq!(
        navigator.controller().position().cause,
        PositionCause::Controller
    );
}

#[test]
fn stop_and_restart() {
    let mut navigator = navigator(false);
    navigator.select_playlist(Some(playlist(&["a"])), None, true);

    navigator.controller_mut().stop();
    assert!(!navigator.controller().is_playing());
    assert_eq!(navigator.controller().position().at, Duration::ZERO);

    navigator.controller_mut().restart();
    assert!(navigator.controller().is_playing());
    assert_eq!(navigator.controller().position().at, Duration::ZERO);
    assert_eq!(
        navigator.controller().position().cause,
        PositionCause::Controller
    );
}

#[test]
fn empty_playlist_never_offers_navigation() {
    let mut navigator = navigator(false);
    navigator.select_playlist(Some(playlist(&[])), None, true);

    assert!(current_id(&navigator).is_none());
    assert!(!navigator.has_next());
    assert!(!navigator.has_previous());

    navigator.toggle_shuffle();
    assert!(!navigator.has_next());
}
