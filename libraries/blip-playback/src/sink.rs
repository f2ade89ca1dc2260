//! Platform-agnostic audio sink trait
//!
//! Abstracts the single audio output channel (an HTML `<audio>` element,
//! a cpal stream, a test double). The sink holds one media slot; loading
//! replaces whatever was there before.

use std::time::Duration;

/// Token identifying one play request
///
/// Minted by the controller for every play request it issues. The sink
/// adapter hands the token back with the resolution, which lets a late
/// answer for a superseded request be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayToken(u64);

impl PlayToken {
    /// The first token a controller mints
    pub(crate) fn first() -> Self {
        Self(0)
    }

    /// The token after this one
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Platform-agnostic audio output
///
/// Implementors wrap whatever actually decodes and emits audio. All
/// methods are commands; the sink reports back through the controller's
/// signal handlers (`on_play_resolved`, `on_playback_ended`,
/// `on_playback_error`, `loading_state_changed`), routed by the
/// composition root.
pub trait AudioSink {
    /// Point the sink at new media, replacing whatever was loaded
    fn load(&mut self, url: &str);

    /// Start playback of the loaded media
    ///
    /// Playback starts asynchronously. The adapter must resolve the
    /// request exactly once by passing `token` back to the controller's
    /// `on_play_resolved`, with `Ok` once audio is actually running or
    /// `Err` when the sink refuses.
    fn begin_play(&mut self, token: PlayToken);

    /// Pause output, keeping the current position
    fn pause(&mut self);

    /// Move the playhead
    fn seek(&mut self, position: Duration);

    /// Reset the playhead to the start of the media
    ///
    /// Equivalent to `seek(Duration::ZERO)`
    fn reset(&mut self) {
        self.seek(Duration::ZERO);
    }

    /// Set output gain in [0.0, 1.0]
    fn set_gain(&mut self, gain: f32);
}
