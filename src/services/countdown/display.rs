use chrono::{Datelike, NaiveDateTime};

use super::schedule::days_remaining;

/// Render the overlay label for `days` remaining until `target` in `year`.
pub fn countdown_text(target: &str, year: i32, days: i64) -> String {
    if days < 0 {
        format!("{}已结束!", target)
    } else {
        format!("距离{}年{}还有{}天", year, target, days)
    }
}

/// Display state of the overlay: the label and the day count it was built from.
///
/// Derived from the configured target and the clock on every refresh;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownDisplay {
    target: String,
    target_instant: NaiveDateTime,
    last_computed_days: i64,
    text: String,
}

impl CountdownDisplay {
    /// Build the display and compute its first value immediately.
    pub fn new(target: impl Into<String>, target_instant: NaiveDateTime, now: NaiveDateTime) -> Self {
        let target = target.into();
        let days = days_remaining(target_instant, now);
        let text = countdown_text(&target, target_instant.year(), days);
        Self {
            target,
            target_instant,
            last_computed_days: days,
            text,
        }
    }

    /// Recompute against `now`. Returns true when the label changed.
    pub fn refresh(&mut self, now: NaiveDateTime) -> bool {
        let days = days_remaining(self.target_instant, now);
        if days == self.last_computed_days {
            return false;
        }
        self.last_computed_days = days;
        self.text = countdown_text(&self.target, self.target_instant.year(), days);
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn days_remaining(&self) -> i64 {
        self.last_computed_days
    }

    pub fn has_ended(&self) -> bool {
        self.last_computed_days < 0
    }
}
