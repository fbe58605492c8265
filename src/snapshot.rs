//! Playback snapshot persistence
//!
//! One flat JSON file holding the playlist, current track index and the
//! playback position, written on track change and shutdown and restored
//! on startup. Loading is tolerant: a missing or corrupt snapshot starts
//! the player fresh, it never aborts startup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Everything needed to resume where the user left off
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Track paths in playlist order
    pub playlist: Vec<PathBuf>,
    /// Index of the track that was playing
    #[serde(default)]
    pub current_index: usize,
    /// Position within that track, in seconds
    #[serde(default)]
    pub position_secs: f64,
}

impl PlaybackSnapshot {
    /// Get the snapshot file path under the platform config directory
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "verseline", "Verseline")
            .map(|dirs| dirs.config_dir().join("playlist.json"))
    }

    /// Load the snapshot from the default location, if one exists
    pub fn load() -> Option<Self> {
        let path = Self::file_path()?;
        match Self::load_from_file(&path) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!("could not restore playback snapshot: {err:#}");
                None
            }
        }
    }

    /// Load a snapshot from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("parsing snapshot {:?}", path))
    }

    /// Save the snapshot to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::file_path().context("could not determine config directory")?;
        self.save_to_file(&path)
    }

    /// Save the snapshot to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating snapshot directory {:?}", parent))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing snapshot {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("playlist.json");

        let snapshot = PlaybackSnapshot {
            playlist: vec![PathBuf::from("/music/a.mp3"), PathBuf::from("/music/b.flac")],
            current_index: 1,
            position_secs: 42.5,
        };
        snapshot.save_to_file(&path).unwrap();

        let restored = PlaybackSnapshot::load_from_file(&path).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_missing_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PlaybackSnapshot::load_from_file(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_partial_snapshot_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlist.json");
        std::fs::write(&path, r#"{"playlist": ["/music/a.mp3"]}"#).unwrap();

        let restored = PlaybackSnapshot::load_from_file(&path).unwrap();
        assert_eq!(restored.current_index, 0);
        assert_eq!(restored.position_secs, 0.0);
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playlist.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(PlaybackSnapshot::load_from_file(&path).is_err());
    }
}
