// Countdown configuration model
// In-memory form plus the flat shape written to config.json

use serde::{Deserialize, Serialize};

/// Label used when the user leaves the target prompt blank.
pub const DEFAULT_TARGET: &str = "高考";
/// Month/day used when the user leaves the date prompt blank (7 June).
pub const DEFAULT_DATE: &str = "0607";
/// Longest label, in characters, the overlay will display.
pub const MAX_TARGET_CHARS: usize = 8;

/// Validated countdown configuration handed to the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownConfig {
    pub target: String,
    pub month: u32,
    pub day: u32,
}

impl CountdownConfig {
    pub fn new(target: impl Into<String>, month: u32, day: u32) -> Self {
        Self {
            target: target.into(),
            month,
            day,
        }
    }

    /// Month and day in the `MMDD` form used on disk.
    pub fn mmdd(&self) -> String {
        format!("{:02}{:02}", self.month, self.day)
    }
}

/// On-disk representation: `{"target": "...", "date": "MMDD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    pub target: String,
    pub date: String,
}

impl From<&CountdownConfig> for StoredConfig {
    fn from(config: &CountdownConfig) -> Self {
        Self {
            target: config.target.clone(),
            date: config.mmdd(),
        }
    }
}

/// Apply the blank-input default and clamp the label to [`MAX_TARGET_CHARS`].
pub fn normalize_target(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_TARGET.to_string();
    }
    trimmed.chars().take(MAX_TARGET_CHARS).collect()
}
