/// ID types for Blip Soundboard entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sound identifier
///
/// Opaque, unique within a library. Freshly added sounds get a random
/// uuid-v4 identifier; adapters that persist or transfer records keep the
/// string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundId(String);

impl SoundId {
    /// Create a sound ID from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random sound ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
