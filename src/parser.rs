//! Lyric parsing
//!
//! Entry point for turning raw lyric text into a [`LyricTrack`]. Only the
//! line-level LRC format is handled; word-level formats are not part of
//! this player.

mod lrc;
mod types;

pub use types::{LyricLine, LyricTrack, MetaTag, TrackMetadata};

use crate::i18n::Locale;

/// Parse raw lyric text into a track
///
/// Malformed lines are dropped, never reported: a damaged lyric file must
/// not interrupt playback. When no timed line survives (empty input, all
/// lines malformed), the result is the localized single-line placeholder
/// so downstream consumers always have at least one line to show.
pub fn parse(raw: &str, locale: Locale) -> LyricTrack {
    let mut lines = Vec::new();
    let mut metadata = TrackMetadata::default();

    for line in raw.lines() {
        if let Some((tag, value)) = lrc::parse_metadata_tag(line) {
            metadata.insert(tag, value);
        } else if let Some(entry) = lrc::parse_timed_line(line) {
            lines.push(entry);
        }
    }

    if lines.is_empty() {
        tracing::debug!("no timed lyric lines found, using placeholder");
        let mut track = LyricTrack::placeholder(locale);
        track.metadata = metadata;
        return track;
    }

    // Stable sort keeps file order for duplicate timestamps
    lines.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
    tracing::debug!("parsed {} lyric lines", lines.len());

    LyricTrack::new(lines, metadata)
}
