//! Error types reported by audio sinks

use thiserror::Error;

/// Failures produced by an audio sink
///
/// Adapters hand these back to the controller, either as the resolution
/// of a play request or as a mid-stream error signal. They never
/// propagate past the controller; every failure is recovered locally and
/// surfaced through the presenter.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink refused to start playback of the loaded media
    #[error("play request rejected: {0}")]
    PlayRejected(String),

    /// The media stream failed after playback had started
    #[error("media stream failed: {0}")]
    Stream(String),

    /// The sink cannot fetch or decode the media at all
    #[error("unsupported media: {0}")]
    Unsupported(String),
}
