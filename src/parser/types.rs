//! Lyric data types
//!
//! Timestamps are seconds as `f64` throughout; the transport side of the
//! player reports position in seconds, so lyrics stay in the same unit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::i18n::{Key, Locale};

/// A single timed lyric line
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LyricLine {
    /// Start time in seconds, never negative
    pub timestamp: f64,
    /// The line text, trimmed of surrounding whitespace
    pub text: String,
}

impl LyricLine {
    pub fn new(timestamp: f64, text: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.max(0.0),
            text: text.into(),
        }
    }
}

/// Metadata tags recognized in lyric file headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaTag {
    /// `[ti:...]` song title
    Title,
    /// `[ar:...]` artist
    Artist,
    /// `[by:...]` lyric file author
    By,
}

/// Header metadata collected from a lyric file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub by: Option<String>,
}

impl TrackMetadata {
    /// Record a tag value. A repeated tag concatenates with `" / "` rather
    /// than overwriting; some files carry multiple `[ar:...]` lines.
    pub fn insert(&mut self, tag: MetaTag, value: &str) {
        let slot = match tag {
            MetaTag::Title => &mut self.title,
            MetaTag::Artist => &mut self.artist,
            MetaTag::By => &mut self.by,
        };
        match slot {
            Some(existing) => {
                existing.push_str(" / ");
                existing.push_str(value);
            }
            None => *slot = Some(value.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.by.is_none()
    }
}

/// A fully parsed lyric track
///
/// Invariant: `lines` is non-empty and sorted by timestamp ascending.
/// A file with no usable timed lines yields a single placeholder line at
/// 0.0, so consumers never deal with an empty sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LyricTrack {
    pub lines: Vec<LyricLine>,
    pub metadata: TrackMetadata,
    /// Path of the lyric file this track came from, when loaded from disk
    pub source_path: Option<PathBuf>,
    /// Set at construction when the single line is the synthetic
    /// "no lyrics" text; a real track is never reclassified by shape
    #[serde(default)]
    placeholder: bool,
}

impl LyricTrack {
    /// Track built from parsed lines; `lines` must already be sorted
    pub fn new(lines: Vec<LyricLine>, metadata: TrackMetadata) -> Self {
        Self {
            lines,
            metadata,
            source_path: None,
            placeholder: false,
        }
    }

    /// Track holding only the localized "no lyrics" placeholder line
    pub fn placeholder(locale: Locale) -> Self {
        Self {
            lines: vec![LyricLine::new(0.0, locale.get(Key::NoLyrics))],
            metadata: TrackMetadata::default(),
            source_path: None,
            placeholder: true,
        }
    }

    /// Whether this track is the synthetic no-lyrics placeholder
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}
