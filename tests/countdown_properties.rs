// Property-based tests for MMDD validation and the countdown arithmetic

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use countdown_overlay::services::config::{config_from_answers, parse_mmdd};
use countdown_overlay::services::countdown::{
    countdown_text, days_remaining, resolve_target_instant, CountdownDisplay, ROLLOVER_GRACE_DAYS,
};
use proptest::prelude::*;

fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    })
}

proptest! {
    #[test]
    fn every_real_date_is_accepted(year in 2000i32..2100, ordinal in 1u32..=365) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let mmdd = format!("{:02}{:02}", date.month(), date.day());
        prop_assert_eq!(parse_mmdd(&mmdd, year).unwrap(), (date.month(), date.day()));
    }

    #[test]
    fn four_digit_strings_match_the_calendar(year in 2000i32..2100, digits in "[0-9]{4}") {
        let month: u32 = digits[..2].parse().unwrap();
        let day: u32 = digits[2..].parse().unwrap();
        let real = NaiveDate::from_ymd_opt(year, month, day).is_some();
        prop_assert_eq!(parse_mmdd(&digits, year).is_ok(), real);
    }

    #[test]
    fn non_mmdd_strings_are_rejected(input in "\\PC*") {
        prop_assume!(!(input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit())));
        prop_assert!(parse_mmdd(&input, 2025).is_err());
    }

    #[test]
    fn long_targets_keep_eight_characters(target in "[a-z\u{4e00}-\u{4e80}]{1,20}") {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let config = config_from_answers(Some(target.as_str()), None, today).unwrap();
        prop_assert_eq!(config.target.chars().count(), target.chars().count().min(8));
        prop_assert!(target.starts_with(&config.target));
    }

    #[test]
    fn rollover_follows_grace_period(now in instant_strategy(), month in 1u32..=12, day in 1u32..=28) {
        let resolved = resolve_target_instant(now, month, day).unwrap();
        let this_year = NaiveDate::from_ymd_opt(now.year(), month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        if now - this_year > Duration::days(ROLLOVER_GRACE_DAYS) {
            prop_assert_eq!(resolved.year(), now.year() + 1);
        } else {
            prop_assert_eq!(resolved, this_year);
        }
    }

    #[test]
    fn resolved_target_is_never_far_in_the_past(now in instant_strategy(), month in 1u32..=12, day in 1u32..=28) {
        let resolved = resolve_target_instant(now, month, day).unwrap();
        prop_assert!(now - resolved <= Duration::days(ROLLOVER_GRACE_DAYS));
        prop_assert!(days_remaining(resolved, now) >= -ROLLOVER_GRACE_DAYS);
    }

    #[test]
    fn day_count_is_floor_plus_one(now in instant_strategy(), offset_minutes in -20_000i64..800_000) {
        let target = now + Duration::minutes(offset_minutes);
        let expected = offset_minutes.div_euclid(24 * 60) + 1;
        prop_assert_eq!(days_remaining(target, now), expected);
    }

    #[test]
    fn text_form_depends_only_on_sign(days in -1000i64..1000) {
        let text = countdown_text("高考", 2025, days);
        if days < 0 {
            prop_assert_eq!(text, "高考已结束!".to_string());
        } else {
            prop_assert_eq!(text, format!("距离2025年高考还有{}天", days));
        }
    }

    #[test]
    fn refresh_with_same_clock_is_stable(now in instant_strategy(), offset_days in -30i64..400) {
        let target = now + Duration::days(offset_days);
        let mut display = CountdownDisplay::new("期末", target, now);
        let first = display.text().to_string();
        prop_assert!(!display.refresh(now));
        prop_assert_eq!(display.text(), first.as_str());
    }
}
