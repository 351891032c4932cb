use chrono::{Duration, TimeZone, Utc};
use mpesa_client::utils::time::{Clock, ManualClock, SystemClock, mpesa_timestamp};

#[test]
fn test_mpesa_timestamp_uses_east_africa_time() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 30).unwrap();
    assert_eq!(mpesa_timestamp(instant), "20240305120730");
}

#[test]
fn test_mpesa_timestamp_rolls_over_midnight() {
    let instant = Utc.with_ymd_and_hms(2023, 12, 31, 22, 0, 0).unwrap();
    assert_eq!(mpesa_timestamp(instant), "20240101010000");
}

#[test]
fn test_manual_clock_set_and_advance() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let clock = ManualClock::new(start);
    assert_eq!(clock.now(), start);

    clock.advance(Duration::seconds(3599));
    assert_eq!(clock.now(), start + Duration::seconds(3599));

    let later = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    clock.set(later);
    assert_eq!(clock.now(), later);
}

#[test]
fn test_system_clock_is_close_to_now() {
    let before = Utc::now();
    let now = SystemClock.now();
    let after = Utc::now();
    assert!(before <= now && now <= after);
}
