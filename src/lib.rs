//! verseline - lyric synchronization engine for a desktop music player
//!
//! The crate parses timed (LRC) lyric files, maps playback position to
//! the active lyric line, and drives the follow/locked scroll state the
//! lyric view renders from. The playlist, play-mode cycling and playback
//! snapshot persistence the player is built around live here too.
//!
//! Audio decoding and output, album art, and all rendering belong to
//! external collaborators: they feed `poll(position, duration)` in and
//! get a [`sync::TickPayload`] back, and drain [`sync::SeekRequest`]s
//! when the user clicks a lyric line.

pub mod discovery;
pub mod encoding;
pub mod i18n;
pub mod parser;
pub mod playlist;
pub mod snapshot;
pub mod sync;
pub mod timeline;

pub use i18n::{Language, Locale};
pub use parser::{LyricLine, LyricTrack, MetaTag, TrackMetadata, parse};
pub use playlist::{PlayMode, Playlist, TransportState};
pub use snapshot::PlaybackSnapshot;
pub use sync::{
    FollowMode, SeekRequest, SyncController, SyncState, TickPayload, seek_request_channel,
};
pub use timeline::active_index_at;
