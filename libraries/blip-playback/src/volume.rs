//! Volume control
//!
//! A 0-100% level mapped linearly onto the sink's [0, 1] gain scale.
//! The level persists across playback sessions; it belongs to the player,
//! not to whatever sound happens to be active.

/// Volume setting
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,
}

impl Volume {
    /// Create a new volume setting, clamping to 100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
        }
    }

    /// Set volume level (0-100, clamped)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Gain for the sink, in [0.0, 1.0]
    pub fn gain(&self) -> f32 {
        f32::from(self.level) / 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(50)
    }
}
