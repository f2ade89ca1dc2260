//! Core types for playback control

use serde::{Deserialize, Serialize};

/// Playback session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing active
    Idle,

    /// A play request is waiting on the sink
    Loading,

    /// The sink confirmed playback is running
    Playing,
}

/// Configuration for the sound player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0-100, default: 50)
    pub initial_volume: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { initial_volume: 50 }
    }
}

/// Snapshot of play statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStats {
    /// Successful play starts across the library's lifetime
    pub sounds_played: u64,

    /// Current number of sounds in the library
    pub library_size: usize,
}
