mod common;
use common::t;
use ojtlog::core::calculator::shift::{compute_shift, compute_shift_with, raw_shift_hours};
use ojtlog::models::settings::AttendanceSettings;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_late_within_grace_is_credited_from_schedule() {
    let calc = compute_shift(Some(t("08:20")), Some(t("17:00")), t("08:00"), 30, 1.0);

    assert_eq!(calc.adjusted_start_time, Some(t("08:00")));
    assert!(calc.was_adjusted);
    assert!(approx(calc.hours, 8.0));
    assert!(approx(calc.rounded_hours(), 8.0));
}

#[test]
fn test_late_beyond_grace_keeps_actual_start() {
    let calc = compute_shift(Some(t("08:45")), Some(t("17:00")), t("08:00"), 30, 0.0);

    assert_eq!(calc.adjusted_start_time, Some(t("08:45")));
    assert!(!calc.was_adjusted);
    assert!(approx(calc.hours, 8.25));
}

#[test]
fn test_grace_boundary_is_inclusive() {
    let at_edge = compute_shift(Some(t("08:30")), Some(t("17:00")), t("08:00"), 30, 0.0);
    assert!(at_edge.was_adjusted);
    assert!(approx(at_edge.hours, 9.0));

    let past_edge = compute_shift(Some(t("08:31")), Some(t("17:00")), t("08:00"), 30, 0.0);
    assert!(!past_edge.was_adjusted);
    assert_eq!(past_edge.adjusted_start_time, Some(t("08:31")));
}

#[test]
fn test_on_time_and_early_are_not_adjusted() {
    for start in ["08:00", "07:30", "06:00"] {
        let calc = compute_shift(Some(t(start)), Some(t("17:00")), t("08:00"), 30, 0.0);
        assert!(!calc.was_adjusted, "start {start}");
        assert_eq!(calc.adjusted_start_time, Some(t(start)));
    }

    let early = compute_shift(Some(t("07:30")), Some(t("17:00")), t("08:00"), 30, 0.0);
    assert!(approx(early.hours, 9.5));
}

#[test]
fn test_zero_grace_never_adjusts() {
    let calc = compute_shift(Some(t("08:01")), Some(t("17:00")), t("08:00"), 0, 0.0);
    assert!(!calc.was_adjusted);
}

#[test]
fn test_overnight_shift_rolls_over() {
    let calc = compute_shift(Some(t("22:00")), Some(t("06:00")), t("08:00"), 30, 0.0);
    assert!(approx(calc.hours, 8.0));

    assert!(approx(raw_shift_hours(Some(t("22:00")), Some(t("06:00"))), 8.0));
}

#[test]
fn test_equal_start_and_end_counts_a_full_day() {
    let calc = compute_shift(Some(t("09:00")), Some(t("09:00")), t("08:00"), 0, 0.0);
    assert!(approx(calc.hours, 24.0));
}

#[test]
fn test_lunch_longer_than_shift_clamps_to_zero() {
    let calc = compute_shift(Some(t("09:00")), Some(t("10:00")), t("08:00"), 30, 3.0);
    assert!(approx(calc.hours, 0.0));
}

#[test]
fn test_negative_lunch_is_ignored() {
    let calc = compute_shift(Some(t("08:00")), Some(t("17:00")), t("08:00"), 30, -2.0);
    assert!(approx(calc.hours, 9.0));
}

#[test]
fn test_missing_times_yield_zero() {
    let no_end = compute_shift(Some(t("08:00")), None, t("08:00"), 30, 0.0);
    assert!(approx(no_end.hours, 0.0));
    assert!(!no_end.was_adjusted);

    let no_start = compute_shift(None, Some(t("17:00")), t("08:00"), 30, 0.0);
    assert!(approx(no_start.hours, 0.0));
    assert_eq!(no_start.adjusted_start_time, None);

    assert!(approx(raw_shift_hours(None, Some(t("17:00"))), 0.0));
}

#[test]
fn test_default_settings_drive_the_calculation() {
    let settings = AttendanceSettings::default();
    assert_eq!(settings.scheduled_time_in, t("08:00"));
    assert_eq!(settings.grace_window_minutes, 30);

    let calc = compute_shift_with(&settings, Some(t("08:10")), Some(t("12:00")), 0.0);
    assert!(calc.was_adjusted);
    assert!(approx(calc.hours, 4.0));
}

#[test]
fn test_rounded_hours_two_decimals() {
    let calc = compute_shift(Some(t("08:00")), Some(t("08:20")), t("08:00"), 0, 0.0);
    assert!(approx(calc.rounded_hours(), 0.33));
}
