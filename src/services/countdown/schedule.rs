//! Target-date arithmetic for the countdown.
//!
//! All values are local wall-clock times without a zone attached, so a
//! configured date always means midnight on that calendar day wherever the
//! widget runs.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// How many days a past target stays on the current year before the
/// countdown rolls over to next year's date.
pub const ROLLOVER_GRACE_DAYS: i64 = 5;

/// Furthest a 29 February target may have to look for the next leap year.
const MAX_YEARS_AHEAD: i32 = 8;

fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Resolve a month/day to a concrete target instant relative to `now`.
///
/// Uses this year's date unless it lies more than [`ROLLOVER_GRACE_DAYS`]
/// in the past, in which case the next year containing that month/day is
/// used. Returns `None` only if the month/day never exists.
pub fn resolve_target_instant(now: NaiveDateTime, month: u32, day: u32) -> Option<NaiveDateTime> {
    let year = now.year();
    match midnight(year, month, day) {
        Some(instant) if now - instant <= Duration::days(ROLLOVER_GRACE_DAYS) => Some(instant),
        _ => (year + 1..=year + MAX_YEARS_AHEAD).find_map(|y| midnight(y, month, day)),
    }
}

/// Whole days until `target`, floored toward negative infinity, plus one.
///
/// The day of the target itself therefore reads 0 from midnight onward and
/// anything negative means the target has passed.
pub fn days_remaining(target: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let delta = target - now;
    let whole = delta.num_days();
    // num_days truncates toward zero
    let floored = if delta < Duration::days(whole) {
        whole - 1
    } else {
        whole
    };
    floored + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn target_later_this_year_is_kept() {
        let now = at(2025, 1, 1, 0, 0);
        assert_eq!(resolve_target_instant(now, 12, 25), Some(at(2025, 12, 25, 0, 0)));
    }

    #[test]
    fn target_more_than_five_days_past_rolls_over() {
        let now = at(2024, 6, 15, 0, 0);
        assert_eq!(resolve_target_instant(now, 6, 7), Some(at(2025, 6, 7, 0, 0)));
    }

    #[test_case(1 ; "one day past")]
    #[test_case(3 ; "three days past")]
    #[test_case(5 ; "exactly five days past")]
    fn target_within_grace_period_is_kept(days_past: i64) {
        let target = at(2025, 6, 7, 0, 0);
        let now = target + Duration::days(days_past);
        assert_eq!(resolve_target_instant(now, 6, 7), Some(target));
    }

    #[test]
    fn grace_period_boundary_is_strict() {
        let target = at(2025, 6, 7, 0, 0);
        let now = target + Duration::days(5) + Duration::seconds(1);
        assert_eq!(resolve_target_instant(now, 6, 7), Some(at(2026, 6, 7, 0, 0)));
    }

    #[test]
    fn leap_day_skips_to_next_leap_year() {
        let now = at(2024, 3, 10, 12, 0);
        assert_eq!(resolve_target_instant(now, 2, 29), Some(at(2028, 2, 29, 0, 0)));
    }

    #[test]
    fn leap_day_in_common_year_looks_ahead() {
        let now = at(2025, 1, 10, 12, 0);
        assert_eq!(resolve_target_instant(now, 2, 29), Some(at(2028, 2, 29, 0, 0)));
    }

    #[test]
    fn impossible_month_day_never_resolves() {
        let now = at(2025, 1, 1, 0, 0);
        assert_eq!(resolve_target_instant(now, 2, 30), None);
        assert_eq!(resolve_target_instant(now, 13, 1), None);
    }

    #[test]
    fn partial_day_counts_as_one() {
        let now = at(2025, 6, 6, 9, 0);
        assert_eq!(days_remaining(at(2025, 6, 7, 0, 0), now), 1);
    }

    #[test]
    fn whole_days_add_one() {
        let now = at(2025, 1, 1, 0, 0);
        assert_eq!(days_remaining(at(2025, 12, 25, 0, 0), now), 359);
    }

    #[test]
    fn target_day_reads_zero() {
        let now = at(2025, 6, 7, 10, 30);
        assert_eq!(days_remaining(at(2025, 6, 7, 0, 0), now), 0);
    }

    #[test]
    fn day_after_target_is_negative() {
        let now = at(2025, 6, 8, 0, 1);
        assert_eq!(days_remaining(at(2025, 6, 7, 0, 0), now), -1);
    }

    #[test]
    fn exact_target_instant_reads_one() {
        let target = at(2025, 6, 7, 0, 0);
        assert_eq!(days_remaining(target, target), 1);
    }
}
