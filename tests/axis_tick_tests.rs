use chrono::{TimeZone, Utc};
use gantt_rs::core::{TimeInterval, datetime_to_unix_seconds, try_format_tick};

fn unix(hour: u32, minute: u32) -> f64 {
    Utc.with_ymd_and_hms(2024, 3, 4, hour, minute, 0)
        .unwrap()
        .timestamp() as f64
}

#[test]
fn hourly_ticks_across_a_working_day() {
    let labels: Vec<_> = TimeInterval::Hours(1)
        .walk(unix(7, 0), unix(17, 30))
        .expect("walk")
        .map(|tick| try_format_tick(tick, "%H:%M").expect("format"))
        .collect();

    assert_eq!(labels.len(), 11);
    assert_eq!(labels.first().map(String::as_str), Some("07:00"));
    assert_eq!(labels.last().map(String::as_str), Some("17:00"));
}

#[test]
fn walk_is_restartable() {
    let walk = TimeInterval::Minutes(30)
        .walk(unix(9, 0), unix(12, 0))
        .expect("walk");

    let first: Vec<_> = walk.clone().collect();
    let second: Vec<_> = walk.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
}

#[test]
fn multi_unit_steps() {
    let count = TimeInterval::Days(2)
        .walk(unix(0, 0), unix(0, 0) + 6.0 * 86_400.0)
        .expect("walk")
        .count();
    assert_eq!(count, 4);

    let count = TimeInterval::Weeks(1)
        .walk(unix(0, 0), unix(0, 0) + 13.0 * 86_400.0)
        .expect("walk")
        .count();
    assert_eq!(count, 2);
}

#[test]
fn ticks_are_anchored_at_the_range_start() {
    let ticks: Vec<_> = TimeInterval::Hours(1)
        .walk(unix(7, 42), unix(9, 42))
        .expect("walk")
        .collect();

    assert_eq!(datetime_to_unix_seconds(ticks[0]), unix(7, 42));
    assert_eq!(datetime_to_unix_seconds(ticks[1]), unix(8, 42));
    assert_eq!(ticks.len(), 3);
}

#[test]
fn reversed_range_is_rejected() {
    assert!(TimeInterval::Hours(1).walk(unix(10, 0), unix(9, 0)).is_err());
}

#[test]
fn non_finite_range_is_rejected() {
    assert!(TimeInterval::Hours(1).walk(f64::NAN, unix(9, 0)).is_err());
    assert!(
        TimeInterval::Hours(1)
            .walk(unix(9, 0), f64::INFINITY)
            .is_err()
    );
}

#[test]
fn interval_serde_is_externally_tagged() {
    let interval: TimeInterval = serde_json::from_str(r#"{"minutes": 15}"#).expect("parse");
    assert_eq!(interval, TimeInterval::Minutes(15));
    assert_eq!(
        serde_json::to_string(&TimeInterval::Days(1)).expect("serialize"),
        r#"{"days":1}"#
    );
}
