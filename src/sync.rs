//! Sync controller
//!
//! Bridges periodic position polling to timeline queries and owns the
//! follow/locked view state. The controller holds the loaded track and
//! its sync state behind one mutex, so a `load` swaps both wholesale and
//! a poll tick racing the swap sees either the old pair or the new pair,
//! never a mix.
//!
//! ```text
//! Playback backend --poll(position, duration)--> SyncController
//! UI / overlay    <--TickPayload-------------- SyncController
//! Playback backend <--SeekRequest------------- SyncController (line click)
//! ```

use std::sync::Arc;
use std::sync::mpsc;

use parking_lot::Mutex;

use crate::i18n::Locale;
use crate::parser::{self, LyricTrack, TrackMetadata};
use crate::timeline;

/// Whether the lyric view auto-follows the active line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowMode {
    /// Auto-scroll to the active line on every tick
    #[default]
    Following,
    /// The user scrolled away; keep the view where they left it
    Locked,
}

/// Per-track view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncState {
    /// Index of the currently active line, always in bounds
    pub active_index: usize,
    pub follow: FollowMode,
}

/// Seek requested by the user activating a lyric line
///
/// The controller never moves playback itself; the backend drains these
/// and performs the actual seek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekRequest {
    pub seconds: f64,
}

pub type SeekRequestSender = mpsc::Sender<SeekRequest>;
pub type SeekRequestReceiver = mpsc::Receiver<SeekRequest>;

/// Create the channel carrying seek requests to the playback backend
pub fn seek_request_channel() -> (SeekRequestSender, SeekRequestReceiver) {
    mpsc::channel()
}

/// What one poll tick tells the UI
///
/// `track` and `active_index` come from the same locked read, so the
/// index is always valid for the lines the payload carries even when a
/// track swap races the tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickPayload {
    /// Index of the active line, recomputed every tick in both modes
    pub active_index: usize,
    /// Scroll instruction; `None` while the view is locked
    pub scroll_to: Option<usize>,
    /// The lines and metadata this index refers to
    pub track: Arc<LyricTrack>,
    /// Text of the active line, for overlays that always track it
    pub current_line: String,
    /// Text of the following line when double-line mode is on
    /// (`Some("")` at the last line so the overlay can clear its second row)
    pub next_line: Option<String>,
}

/// Tunable display options, all runtime-settable
#[derive(Debug, Clone, Copy)]
struct SyncOptions {
    /// Constant lyric delay compensation in seconds, may be negative
    offset_secs: f64,
    /// Emit current + next line together for the overlay
    double_line: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            offset_secs: 0.0,
            double_line: false,
        }
    }
}

/// Everything a tick reads, swapped as a unit on track change
struct ControllerState {
    track: Arc<LyricTrack>,
    sync: SyncState,
    options: SyncOptions,
}

/// Drives lyric synchronization for the currently loaded track
///
/// All methods are synchronous and bounded; the polling cadence is owned
/// by the caller. Correctness does not depend on tick frequency, and a
/// seek (time jumping in either direction) goes through the same pure
/// timeline query as normal forward progress.
pub struct SyncController {
    state: Mutex<ControllerState>,
    locale: Locale,
    seek_tx: Option<SeekRequestSender>,
}

impl SyncController {
    /// Controller with no track loaded yet (placeholder lyrics)
    pub fn new(locale: Locale) -> Self {
        Self {
            state: Mutex::new(ControllerState {
                track: Arc::new(LyricTrack::placeholder(locale)),
                sync: SyncState::default(),
                options: SyncOptions::default(),
            }),
            locale,
            seek_tx: None,
        }
    }

    /// Attach the channel that carries line-click seek requests
    pub fn with_seek_channel(mut self, tx: SeekRequestSender) -> Self {
        self.seek_tx = Some(tx);
        self
    }

    /// Load lyrics for a new track, replacing track and state wholesale
    ///
    /// Display options (offset, double-line) survive track changes; the
    /// view state resets to `{0, Following}`.
    pub fn load(&self, raw_lyric_text: &str) {
        let track = parser::parse(raw_lyric_text, self.locale);
        self.load_track(track);
    }

    /// Load the lyrics associated with an audio file
    ///
    /// Looks up the sidecar lyric file next to the audio file; no sidecar
    /// or an unreadable one degrades to the placeholder track. This never
    /// fails: lyrics are decoration, playback must not care.
    pub fn load_for_audio(&self, audio_path: &std::path::Path) {
        let found = match crate::discovery::read_lyrics_for(audio_path) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!("failed to read lyrics for {:?}: {err:#}", audio_path);
                None
            }
        };
        let track = match found {
            Some((lyrics_path, text)) => {
                let mut track = parser::parse(&text, self.locale);
                track.source_path = Some(lyrics_path);
                track
            }
            None => LyricTrack::placeholder(self.locale),
        };
        self.load_track(track);
    }

    /// Load an already parsed track
    ///
    /// An empty line list never enters the controller; it is replaced by
    /// the placeholder so every tick has a line to serve.
    pub fn load_track(&self, track: LyricTrack) {
        let track = if track.lines.is_empty() {
            LyricTrack::placeholder(self.locale)
        } else {
            track
        };
        let mut state = self.state.lock();
        tracing::debug!(
            lines = track.lines.len(),
            placeholder = track.is_placeholder(),
            "lyric track loaded"
        );
        state.track = Arc::new(track);
        state.sync = SyncState::default();
    }

    /// One polling tick from the playback backend
    ///
    /// Recomputes the active index in both follow modes; only the
    /// `scroll_to` instruction depends on the mode. `duration_seconds` is
    /// accepted for interface symmetry with the backend but the index is
    /// a function of position alone.
    pub fn poll(&self, position_seconds: f64, _duration_seconds: f64) -> TickPayload {
        let mut state = self.state.lock();
        let query_time = position_seconds + state.options.offset_secs;
        let lines = &state.track.lines;
        let active_index = timeline::active_index_at(lines, query_time).min(lines.len() - 1);

        let current_line = lines[active_index].text.clone();
        let next_line = state
            .options
            .double_line
            .then(|| lines.get(active_index + 1).map_or(String::new(), |l| l.text.clone()));

        state.sync.active_index = active_index;
        let scroll_to = match state.sync.follow {
            FollowMode::Following => Some(active_index),
            FollowMode::Locked => None,
        };

        TickPayload {
            active_index,
            scroll_to,
            track: state.track.clone(),
            current_line,
            next_line,
        }
    }

    /// User scrolled the lyric view away from the active line
    pub fn lock_scroll(&self) {
        self.state.lock().sync.follow = FollowMode::Locked;
    }

    /// User asked to jump back to the current line
    pub fn resume_follow(&self) {
        self.state.lock().sync.follow = FollowMode::Following;
    }

    /// Set follow mode directly (`true` = auto-scroll)
    pub fn set_follow(&self, follow: bool) {
        self.state.lock().sync.follow = if follow {
            FollowMode::Following
        } else {
            FollowMode::Locked
        };
    }

    /// Set the constant lyric delay compensation in seconds
    pub fn set_offset(&self, seconds: f64) {
        self.state.lock().options.offset_secs = seconds;
    }

    /// Toggle emitting current + next line for the overlay
    pub fn set_double_line_mode(&self, enabled: bool) {
        self.state.lock().options.double_line = enabled;
    }

    /// User activated (clicked) a lyric line; emits a seek request
    ///
    /// An out-of-range index from a stale view is clamped, not an error:
    /// a click racing a track swap must never interrupt playback.
    pub fn activate_line(&self, index: usize) {
        let state = self.state.lock();
        let lines = &state.track.lines;
        let index = index.min(lines.len() - 1);
        let seconds = lines[index].timestamp;
        drop(state);

        if let Some(tx) = &self.seek_tx {
            if tx.send(SeekRequest { seconds }).is_err() {
                tracing::warn!("seek request dropped, backend channel closed");
            }
        }
    }

    /// Read-only snapshot of the current view state
    pub fn sync_state(&self) -> SyncState {
        self.state.lock().sync
    }

    /// The currently loaded track (cheap Arc clone)
    pub fn track(&self) -> Arc<LyricTrack> {
        self.state.lock().track.clone()
    }

    /// Metadata of the loaded track
    pub fn metadata(&self) -> TrackMetadata {
        self.state.lock().track.metadata.clone()
    }
}
