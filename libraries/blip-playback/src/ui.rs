//! Presentation seam
//!
//! One-way calls from the controller into whatever renders the widget:
//! a DOM adapter, a TUI, a test recorder. No call returns a value, and
//! implementors must not call back into the controller re-entrantly.

use blip_core::SoundRecord;
use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Neutral information
    Info,

    /// Something completed
    Success,

    /// Recoverable problem worth the user's attention
    Warning,

    /// A failure the user should know about
    Error,
}

/// Status shown next to the current sound name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayStatus {
    /// Nothing active, ready to play
    Ready,

    /// A play request is waiting on the sink
    Loading,

    /// Media is audibly playing
    Playing,
}

/// View layer driven by the controller
///
/// Adapters own all rendering detail (markup, widgets, toast timing);
/// the controller only states what changed.
pub trait Presenter {
    /// Render the sound list in insertion order
    fn render_list(&mut self, sounds: &[SoundRecord]);

    /// Update the now-playing line
    ///
    /// `name` is None when nothing is active (or the active record was
    /// removed mid-flight).
    fn show_now_playing(&mut self, name: Option<&str>, status: DisplayStatus);

    /// Reflect whether the main play control shows play or pause
    fn show_play_button(&mut self, is_playing: bool);

    /// Reflect sink buffering in the play control
    fn show_loading(&mut self, is_loading: bool);

    /// Update the played / total counters
    fn update_counters(&mut self, sounds_played: u64, total_sounds: usize);

    /// Show the volume percentage
    fn show_volume(&mut self, percent: u8);

    /// Show a transient notification
    fn notify(&mut self, message: &str, severity: Severity);
}
