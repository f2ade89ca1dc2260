//! Domain types for Blip Soundboard

mod ids;
mod sound;

pub use ids::SoundId;
pub use sound::SoundRecord;
