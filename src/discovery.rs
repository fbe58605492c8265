//! Lyric file discovery for local audio files
//!
//! Association rule: in the audio file's own directory (non-recursive),
//! the first entry in listing order with a recognized lyric extension
//! whose name contains the audio file's base name wins. The matching
//! itself is a pure function over the listing so it can be tested without
//! touching the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::encoding::decode_lyrics;

/// Supported lyrics file extensions
pub const LYRICS_EXTENSIONS: &[&str] = &["lrc"];

fn has_lyrics_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            LYRICS_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Pick the lyric file for `base_name` out of a directory listing
///
/// First match in listing order wins; the lyric file name only has to
/// contain the audio base name ("song.lrc" and "song.化蝶.lrc" both match
/// audio base "song").
pub fn match_lyrics_entry<'a>(base_name: &str, listing: &'a [PathBuf]) -> Option<&'a PathBuf> {
    if base_name.is_empty() {
        return None;
    }
    listing.iter().find(|path| {
        has_lyrics_extension(path)
            && path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| stem.contains(base_name))
    })
}

/// Find the lyric file associated with an audio file, if any
pub fn find_lyrics_file(audio_path: &Path) -> Option<PathBuf> {
    let parent = audio_path.parent()?;
    let base_name = audio_path.file_stem()?.to_str()?;

    let listing: Vec<PathBuf> = fs::read_dir(parent)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();

    match_lyrics_entry(base_name, &listing).cloned()
}

/// Read and decode a lyric file
pub fn read_lyrics(lyrics_path: &Path) -> Result<String> {
    let bytes = fs::read(lyrics_path)
        .with_context(|| format!("reading lyric file {:?}", lyrics_path))?;
    tracing::debug!("loaded lyric file {:?} ({} bytes)", lyrics_path, bytes.len());
    Ok(decode_lyrics(&bytes))
}

/// Find, read and decode the lyric text for an audio file
///
/// `None` means no lyric file exists; the caller feeds that through the
/// parser as empty input to get the placeholder track. Only an actual
/// read failure of an existing file is surfaced.
pub fn read_lyrics_for(audio_path: &Path) -> Result<Option<(PathBuf, String)>> {
    let Some(lyrics_path) = find_lyrics_file(audio_path) else {
        tracing::debug!("no lyric file found for {:?}", audio_path);
        return Ok(None);
    };
    let text = read_lyrics(&lyrics_path)?;
    Ok(Some((lyrics_path, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_exact_stem_match() {
        let entries = listing(&["song.mp3", "song.lrc", "other.lrc"]);
        assert_eq!(
            match_lyrics_entry("song", &entries),
            Some(&PathBuf::from("song.lrc"))
        );
    }

    #[test]
    fn test_substring_match() {
        let entries = listing(&["My Song (Live).lrc"]);
        assert_eq!(
            match_lyrics_entry("My Song", &entries),
            Some(&PathBuf::from("My Song (Live).lrc"))
        );
    }

    #[test]
    fn test_first_in_listing_order_wins() {
        let entries = listing(&["song.v2.lrc", "song.lrc"]);
        assert_eq!(
            match_lyrics_entry("song", &entries),
            Some(&PathBuf::from("song.v2.lrc"))
        );
    }

    #[test]
    fn test_extension_case_insensitive() {
        let entries = listing(&["song.LRC"]);
        assert!(match_lyrics_entry("song", &entries).is_some());
    }

    #[test]
    fn test_no_match() {
        let entries = listing(&["song.mp3", "song.txt", "unrelated.lrc"]);
        assert_eq!(match_lyrics_entry("song", &entries), None);
        assert_eq!(match_lyrics_entry("song", &[]), None);
    }

    #[test]
    fn test_read_lyrics_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("track01.mp3");
        std::fs::write(&audio, b"").unwrap();
        std::fs::write(dir.path().join("track01.lrc"), "[00:01.00]Hello").unwrap();

        let (path, text) = read_lyrics_for(&audio).unwrap().unwrap();
        assert_eq!(path, dir.path().join("track01.lrc"));
        assert_eq!(text, "[00:01.00]Hello");
    }

    #[test]
    fn test_read_lyrics_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let audio = dir.path().join("track01.mp3");
        std::fs::write(&audio, b"").unwrap();
        assert!(read_lyrics_for(&audio).unwrap().is_none());
    }
}
