mod display;
mod schedule;

pub use display::{countdown_text, CountdownDisplay};
pub use schedule::{days_remaining, resolve_target_instant, ROLLOVER_GRACE_DAYS};
