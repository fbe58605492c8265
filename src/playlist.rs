//! Playlist and play-mode handling
//!
//! Owns the ordered track list, the current index, the play-mode cycle
//! and the transport state. The audio backend is told which file to play;
//! nothing here decodes audio.

use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::i18n::{Key, Locale};

/// Audio file extensions the player picks up from a folder
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac"];

/// Play mode for playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Play in order, loop back to start
    #[default]
    LoopAll,
    /// Repeat current song
    LoopOne,
    /// Random order
    Shuffle,
}

impl PlayMode {
    /// Get the next play mode in cycle order
    pub fn next(self) -> Self {
        match self {
            PlayMode::LoopAll => PlayMode::LoopOne,
            PlayMode::LoopOne => PlayMode::Shuffle,
            PlayMode::Shuffle => PlayMode::LoopAll,
        }
    }

    /// Localized display name for the mode button
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match self {
            PlayMode::LoopAll => locale.get(Key::PlayModeLoopAll),
            PlayMode::LoopOne => locale.get(Key::PlayModeLoopOne),
            PlayMode::Shuffle => locale.get(Key::PlayModeShuffle),
        }
    }
}

/// Transport state of the current track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    #[default]
    Stopped,
    Playing,
    Paused,
    /// Backend reported end of track; the playlist decides what's next
    Ended,
}

impl TransportState {
    /// Play/pause button behavior
    pub fn toggled(self) -> Self {
        match self {
            TransportState::Playing => TransportState::Paused,
            TransportState::Paused | TransportState::Stopped | TransportState::Ended => {
                TransportState::Playing
            }
        }
    }
}

/// Ordered track list with a current position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    tracks: Vec<PathBuf>,
    current_index: usize,
}

impl Playlist {
    pub fn new(tracks: Vec<PathBuf>) -> Self {
        Self {
            tracks,
            current_index: 0,
        }
    }

    /// Scan a folder (non-recursive) for audio files, in listing order
    pub fn from_folder(folder: &Path) -> Self {
        let tracks: Vec<PathBuf> = WalkDir::new(folder)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| {
                        AUDIO_EXTENSIONS
                            .iter()
                            .any(|known| ext.eq_ignore_ascii_case(known))
                    })
            })
            .collect();
        tracing::debug!("scanned {:?}: {} audio files", folder, tracks.len());
        Self::new(tracks)
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Path of the current track, `None` for an empty playlist
    pub fn current(&self) -> Option<&PathBuf> {
        self.tracks.get(self.current_index)
    }

    /// Jump to a specific track (user clicked it in the list)
    pub fn select(&mut self, index: usize) -> Option<&PathBuf> {
        if index < self.tracks.len() {
            self.current_index = index;
        }
        self.current()
    }

    /// Advance to the next track, wrapping at the end
    pub fn advance(&mut self) -> Option<&PathBuf> {
        if self.tracks.is_empty() {
            return None;
        }
        self.current_index = (self.current_index + 1) % self.tracks.len();
        self.current()
    }

    /// Step back to the previous track, wrapping at the start
    pub fn retreat(&mut self) -> Option<&PathBuf> {
        if self.tracks.is_empty() {
            return None;
        }
        self.current_index = (self.current_index + self.tracks.len() - 1) % self.tracks.len();
        self.current()
    }

    /// Remove a track, keeping the current index on the same song where
    /// possible
    pub fn remove(&mut self, index: usize) {
        if index >= self.tracks.len() {
            return;
        }
        self.tracks.remove(index);
        if self.tracks.is_empty() {
            self.current_index = 0;
        } else if index < self.current_index {
            self.current_index -= 1;
        } else {
            self.current_index = self.current_index.min(self.tracks.len() - 1);
        }
    }

    /// Case-insensitive substring search over track file names.
    ///
    /// Returns `(index, path)` pairs so a hit in the filtered view can
    /// still be selected by its playlist index. An empty query matches
    /// every track.
    pub fn filter(&self, query: &str) -> Vec<(usize, &PathBuf)> {
        let query = query.to_lowercase();
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, path)| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Decide the next track after the backend reports end-of-track
    pub fn next_on_ended<R: Rng>(&mut self, mode: PlayMode, rng: &mut R) -> Option<&PathBuf> {
        if self.tracks.is_empty() {
            return None;
        }
        match mode {
            PlayMode::LoopOne => self.current(),
            PlayMode::LoopAll => self.advance(),
            PlayMode::Shuffle => {
                self.current_index = rng.random_range(0..self.tracks.len());
                self.current()
            }
        }
    }
}
