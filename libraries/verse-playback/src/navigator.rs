//! Playlist navigator
//!
//! Owns "what playlist is selected", the shuffle flag and the play history,
//! computes next/previous selection over the playlist order, and reacts to
//! track-end notifications by auto-advancing.

use crate::{
    controller::TrackController,
    events::PlaybackEvent,
    history::PlayHistory,
    shuffle,
    types::PlaybackConfig,
};
use tracing::debug;
use verse_core::{Playlist, TrackId};

/// Navigator for ordered and shuffled playlist traversal
pub struct PlaylistNavigator {
    controller: TrackController,
    playlist: Option<Playlist>,
    history: PlayHistory,
    shuffle: bool,
}

impl PlaylistNavigator {
    /// Create a navigator with no playlist selected
    pub fn new(controller: TrackController, config: &PlaybackConfig) -> Self {
        Self {
            controller,
            playlist: None,
            history: PlayHistory::new(),
            shuffle: config.shuffle,
        }
    }

    // ===== Playlist Selection =====

    /// Select a playlist, or `None` to clear it
    ///
    /// Resets the play history. The starting track is the one matching
    /// `start_track` when found, else the playlist's first track, else none.
    /// Playback starts only when `autoplay` is set.
    pub fn select_playlist(
        &mut self,
        playlist: Option<Playlist>,
        start_track: Option<&TrackId>,
        autoplay: bool,
    ) {
        self.history.clear();

        let start = playlist.as_ref().and_then(|playlist| {
            start_track
                .and_then(|id| playlist.track_by_id(id))
                .or_else(|| playlist.tracks.first())
                .cloned()
        });

        match &playlist {
            Some(playlist) => debug!("selecting playlist {} ({})", playlist.id, playlist.title),
            None => debug!("deselecting playlist"),
        }

        self.playlist = playlist;
        self.controller.select_track(start);

        if autoplay {
            self.controller.play();
            self.record_current();
        }
    }

    /// Flip the shuffle flag; the play history is kept
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        debug!("shuffle {}", if self.shuffle { "on" } else { "off" });
    }

    // ===== Navigation =====

    /// Index of the current track within the playlist (0 when either is
    /// absent)
    pub fn current_index(&self) -> usize {
        match (&self.playlist, self.controller.current_track()) {
            (Some(playlist), Some(track)) => playlist.index_of(&track.id).unwrap_or(0),
            _ => 0,
        }
    }

    /// Whether a next track is available
    pub fn has_next(&self) -> bool {
        let Some(playlist) = &self.playlist else {
            return false;
        };
        if playlist.is_empty() {
            return false;
        }
        // shuffled playback can always continue: exhaustion resets the
        // history and drawing starts over
        self.shuffle || self.current_index() < playlist.len() - 1
    }

    /// Whether a previous track is available
    pub fn has_previous(&self) -> bool {
        if self.playlist.is_none() {
            return false;
        }
        if self.shuffle {
            !self.history.is_empty()
        } else {
            self.current_index() > 0
        }
    }

    /// Advance to the next track and play it
    ///
    /// The index we came from is recorded as played once the new track
    /// starts.
    pub fn play_next(&mut self) {
        let previous_index = self.current_index();
        let next_index = self.next_index();

        let track = self
            .playlist
            .as_ref()
            .and_then(|playlist| playlist.tracks.get(next_index))
            .cloned();
        self.controller.select_track(track);
        self.controller.play();

        if self.playlist.as_ref().is_some_and(|p| !p.is_empty()) {
            self.history.record(previous_index);
            self.record_current();
        }
    }

    /// Step back to the most recently played track
    ///
    /// Strictly replays history: the current index is dropped from the
    /// history, the most recent remaining entry is popped and played.
    /// With an empty history the first track is selected.
    pub fn play_previous(&mut self) {
        let previous_index = self.previous_index();

        let track = self
            .playlist
            .as_ref()
            .and_then(|playlist| playlist.tracks.get(previous_index))
            .cloned();
        self.controller.select_track(track);
        self.controller.play();

        self.record_current();
    }

    /// Compute the next index under the active policy
    fn next_index(&mut self) -> usize {
        let Some(playlist) = &self.playlist else {
            return 0;
        };
        let len = playlist.len();
        if len == 0 {
            return 0;
        }
        let current = self.current_index();

        if self.shuffle {
            if self.history.covers(len) {
                debug!("playlist exhausted, resetting play history");
                self.history.clear();
            }
            shuffle::next_shuffled_index(
                len,
                current,
                self.history.as_slice(),
                &mut rand::thread_rng(),
            )
        } else if current + 1 < len {
            current + 1
        } else {
            // already at the last track, stay there
            current
        }
    }

    fn previous_index(&mut self) -> usize {
        if self.playlist.is_none() {
            return 0;
        }

        let current = self.current_index();
        self.history.remove(current);
        self.history.pop().unwrap_or(0)
    }

    /// Record the current index once playback is actually running
    fn record_current(&mut self) {
        if self.controller.is_playing() && self.playlist.as_ref().is_some_and(|p| !p.is_empty()) {
            let index = self.current_index();
            self.history.record(index);
        }
    }

    // ===== Device Events =====

    /// Feed device notifications through the core
    ///
    /// Forwards to the binding, keeps the play history in step with what is
    /// actually playing, auto-advances when the device reports the end of
    /// the track, and hands the drained events back to the caller.
    pub fn pump(&mut self) -> Vec<PlaybackEvent> {
        self.controller.binding_mut().pump();
        let mut events = self.controller.binding_mut().take_events();

        self.record_current();

        if events
            .iter()
            .any(|event| matches!(event, PlaybackEvent::TrackEnded))
        {
            debug!("track ended, auto-advancing");
            self.play_next();
            events.extend(self.controller.binding_mut().take_events());
        }

        events
    }

    // ===== State Queries =====

    /// Currently selected playlist
    pub fn playlist(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    /// Whether shuffle is enabled
    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    /// Indices visited since the last exhaustion reset, oldest first
    pub fn played_indices(&self) -> &[usize] {
        self.history.as_slice()
    }

    /// The track controller
    pub fn controller(&self) -> &TrackController {
        &self.controller
    }

    /// Mutable access to the track controller
    pub fn controller_mut(&mut self) -> &mut TrackController {
        &mut self.controller
    }
}
