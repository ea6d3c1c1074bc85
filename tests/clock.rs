use chrono::{NaiveDate, Offset};
use pipelog::clock::{self, DEFAULT_TIMEZONE};
use pipelog::{Clock, ManualClock, SystemClock};

#[test]
fn date_format_matches_backup_suffixes() {
    let date = NaiveDate::from_ymd_opt(2018, 1, 18).unwrap();

    assert_eq!(clock::format_date(date), "2018-01-18");
}

#[test]
fn timestamp_format_matches_line_prefixes() {
    let clock = ManualClock::at(2018, 1, 18, 0, 0, 0);

    assert_eq!(clock::format_timestamp(&clock.now()), "2018-01-18T00:00:00");
}

#[test]
fn default_zone_is_utc_plus_seven() {
    let clock = SystemClock::new();

    assert_eq!(clock.zone(), DEFAULT_TIMEZONE);
    assert_eq!(clock.now().offset().fix().local_minus_utc(), 7 * 3600);
}

#[test]
fn named_zone_resolves() {
    let clock = SystemClock::with_zone("Asia/Bangkok");

    assert_eq!(clock.now().offset().fix().local_minus_utc(), 7 * 3600);
}

#[test]
fn unknown_zone_falls_back_to_utc() {
    let clock = SystemClock::with_zone("Not/AZone");

    assert_eq!(clock.now().offset().fix().local_minus_utc(), 0);
}

#[test]
fn manual_clock_advances_across_day_boundaries() {
    let clock = ManualClock::at(2024, 5, 10, 23, 59, 0);
    let before = clock.today();

    clock.advance_days(1);

    assert_eq!(clock.today(), before.succ_opt().unwrap());
}

#[test]
fn manual_clock_can_be_set_to_an_instant() {
    let clock = ManualClock::at(2024, 5, 10, 0, 0, 0);
    let target = ManualClock::at(2030, 12, 31, 8, 15, 0).now();

    clock.set(target);

    assert_eq!(clock.now(), target);
}
