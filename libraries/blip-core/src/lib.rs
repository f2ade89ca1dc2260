//! Blip Soundboard Core
//!
//! Domain types shared by every Blip front end.
//!
//! This crate defines the sound record that the library collection owns
//! and the opaque identifier used to address it. It carries no playback
//! logic; see `blip-playback` for the controller.
//!
//! # Example
//!
//! ```rust
//! use blip_core::{SoundId, SoundRecord};
//!
//! let sound = SoundRecord::new("Applause", "assets/sounds/applause.mp3", "Ambience");
//! assert_eq!(sound.play_count, 0);
//!
//! let id: &SoundId = &sound.id;
//! assert!(!id.as_str().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

// Re-export commonly used types
pub use types::{SoundId, SoundRecord};
