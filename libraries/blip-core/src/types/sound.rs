/// Sound record domain type
use crate::types::SoundId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sound in the library
///
/// Created on add, mutated only by bumping `play_count` when a play
/// successfully starts, destroyed on explicit removal. The `url` is an
/// opaque locator handed to the audio sink at play time; it is not
/// validated here, so a broken locator surfaces as a sink failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundRecord {
    /// Unique sound identifier
    pub id: SoundId,

    /// Display name
    pub name: String,

    /// Media locator handed to the sink
    pub url: String,

    /// User-facing category label
    pub category: String,

    /// When the sound was added to the library
    pub added_at: DateTime<Utc>,

    /// Number of successful play starts
    pub play_count: u64,
}

impl SoundRecord {
    /// Create a new sound record with a fresh id and zero play count
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: SoundId::generate(),
            name: name.into(),
            url: url.into(),
            category: category.into(),
            added_at: Utc::now(),
            play_count: 0,
        }
    }

    /// Record one successful play start
    pub fn mark_played(&mut self) {
        self.play_count += 1;
    }
}
