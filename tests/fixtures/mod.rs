// Test fixtures - reusable test data
// Provides consistent dates and prompt doubles across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use countdown_overlay::services::config::{ConfigError, FirstRunPrompt};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    /// Returns Jan 1, 2025 at midnight
    pub fn jan_1_2025() -> NaiveDateTime {
        at(2025, 1, 1, 0, 0)
    }

    /// Returns Jun 6, 2025 at 09:00, the morning before the exam
    pub fn exam_eve_2025() -> NaiveDateTime {
        at(2025, 6, 6, 9, 0)
    }

    /// Returns Jun 15, 2024 at midnight, eight days after that year's exam
    pub fn after_exam_2024() -> NaiveDateTime {
        at(2024, 6, 15, 0, 0)
    }
}

/// Prompt double that replays fixed answers and counts how often it was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub target: Option<String>,
    pub date: Option<String>,
    pub calls: usize,
}

impl ScriptedPrompt {
    pub fn new(target: Option<&str>, date: Option<&str>) -> Self {
        Self {
            target: target.map(str::to_string),
            date: date.map(str::to_string),
            calls: 0,
        }
    }
}

impl FirstRunPrompt for ScriptedPrompt {
    fn ask_target(&mut self) -> Result<Option<String>, ConfigError> {
        self.calls += 1;
        Ok(self.target.clone())
    }

    fn ask_date(&mut self) -> Result<Option<String>, ConfigError> {
        self.calls += 1;
        Ok(self.date.clone())
    }
}
