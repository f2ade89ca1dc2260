//! Blip Soundboard - Playback Control
//!
//! Platform-agnostic sound library and playback control for Blip.
//!
//! This crate provides:
//! - An insertion-ordered sound library with unique ids
//! - Uniform random selection (the active sound included)
//! - A single playback session (Idle -> Loading -> Playing -> Idle)
//! - Token-guarded play requests, so stale sink resolutions are dropped
//! - Volume control (0-100%, linear [0, 1] sink gain)
//! - Play statistics (per-sound play counts + global counter)
//!
//! # Architecture
//!
//! `blip-playback` is completely platform-agnostic: no audio backend, no
//! UI toolkit, no persistence. Platform code supplies two adapters:
//!
//! - [`AudioSink`]: the one audio output channel (load / begin_play /
//!   pause / seek / gain). Sink signals - request resolution, end of
//!   media, stream errors, buffering - are routed back into the
//!   [`SoundPlayer`] handlers by the composition root.
//! - [`Presenter`]: one-way view updates (list, now-playing line,
//!   buttons, counters, notifications).
//!
//! Everything runs to completion on the calling thread; the only
//! asynchronous edge is the play request, resolved later through
//! [`SoundPlayer::on_play_resolved`] with the token the request carried.
//!
//! # Example
//!
//! ```rust
//! use blip_playback::{
//!     AudioSink, DisplayStatus, PlayToken, PlaybackState, PlayerConfig, Presenter, Severity,
//!     SoundPlayer,
//! };
//! use blip_core::SoundRecord;
//! use std::time::Duration;
//!
//! // Minimal adapters; real ones wrap an audio element and a view.
//! struct NullSink;
//!
//! impl AudioSink for NullSink {
//!     fn load(&mut self, _url: &str) {}
//!     fn begin_play(&mut self, _token: PlayToken) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position: Duration) {}
//!     fn set_gain(&mut self, _gain: f32) {}
//! }
//!
//! struct NullUi;
//!
//! impl Presenter for NullUi {
//!     fn render_list(&mut self, _sounds: &[SoundRecord]) {}
//!     fn show_now_playing(&mut self, _name: Option<&str>, _status: DisplayStatus) {}
//!     fn show_play_button(&mut self, _is_playing: bool) {}
//!     fn show_loading(&mut self, _is_loading: bool) {}
//!     fn update_counters(&mut self, _sounds_played: u64, _total_sounds: usize) {}
//!     fn show_volume(&mut self, _percent: u8) {}
//!     fn notify(&mut self, _message: &str, _severity: Severity) {}
//! }
//!
//! let mut player = SoundPlayer::new(
//!     PlayerConfig::default(),
//!     Box::new(NullSink),
//!     Box::new(NullUi),
//! );
//!
//! let id = player.add_sound("Applause", "assets/sounds/applause.mp3", "Ambience");
//! player.set_volume(75);
//!
//! // The request is now waiting on the sink; its adapter resolves it
//! // via player.on_play_resolved(token, ...).
//! player.play_by_id(&id);
//! assert_eq!(player.state(), PlaybackState::Loading);
//!
//! // Stopping abandons the pending request.
//! player.stop();
//! assert_eq!(player.state(), PlaybackState::Idle);
//! assert_eq!(player.stats().library_size, 1);
//! ```

mod controller;
mod error;
mod library;
mod select;
mod sink;
pub mod types;
mod ui;
mod volume;

// Public exports
pub use controller::SoundPlayer;
pub use error::SinkError;
pub use sink::{AudioSink, PlayToken};
pub use types::{PlayStats, PlaybackState, PlayerConfig};
pub use ui::{DisplayStatus, Presenter, Severity};
