mod common;
use common::{d, entry, t};
use ojtlog::core::calculator::report::group_for_report;
use ojtlog::core::summary::summarize;
use ojtlog::utils::date::{month_index, parse_range, week_of_month};

#[test]
fn test_empty_input_gives_no_groups() {
    assert!(group_for_report(&[]).is_empty());
}

#[test]
fn test_partial_entries_are_excluded() {
    let mut no_end = entry(1, "2025-03-10", 2, "March", 8.0);
    no_end.end_time = None;
    let mut no_start = entry(2, "2025-03-11", 2, "March", 8.0);
    no_start.start_time = None;
    let mut no_date = entry(3, "2025-03-12", 2, "March", 8.0);
    no_date.date = None;
    let complete = entry(4, "2025-03-13", 2, "March", 7.5);

    let groups = group_for_report(&[no_end, no_start, no_date, complete]);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].entries.len(), 1);
    assert_eq!(groups[0].entries[0].id, 4);
    assert!((groups[0].total_hours - 7.5).abs() < 1e-9);
}

#[test]
fn test_groups_follow_calendar_then_week_order() {
    let entries = vec![
        entry(1, "2025-04-01", 1, "April", 8.0),
        entry(2, "2025-03-24", 4, "March", 8.0),
        entry(3, "2025-03-10", 2, "March", 8.0),
        entry(4, "2025-01-06", 2, "January", 8.0),
    ];

    let titles: Vec<String> = group_for_report(&entries).iter().map(|g| g.title()).collect();

    assert_eq!(
        titles,
        vec!["January Week 2", "March Week 2", "March Week 4", "April Week 1"]
    );
}

#[test]
fn test_entries_ascend_by_date_and_hours_are_summed() {
    let entries = vec![
        entry(1, "2025-03-12", 2, "March", 8.0),
        entry(2, "2025-03-10", 2, "March", 7.25),
        entry(3, "2025-03-11", 2, "March", 8.333),
    ];

    let groups = group_for_report(&entries);
    assert_eq!(groups.len(), 1);

    let ids: Vec<i64> = groups[0].entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    assert!((groups[0].total_hours - 23.583).abs() < 1e-9);
    assert!((groups[0].total_hours_rounded() - 23.58).abs() < 1e-9);
}

#[test]
fn test_declared_week_wins_over_date() {
    // 2025-03-10 falls in calendar week 3; the entry was filed under week 2.
    assert_eq!(week_of_month(d("2025-03-10")), 3);

    let groups = group_for_report(&[entry(1, "2025-03-10", 2, "March", 8.0)]);
    assert_eq!(groups[0].week, 2);
}

#[test]
fn test_missing_week_and_month_fall_back_to_date() {
    let mut e = entry(1, "2025-03-10", 0, "", 8.0);
    e.week = None;
    e.month = None;
    let mut zero = entry(2, "2025-03-11", 0, "  ", 8.0);
    zero.hours = None;
    zero.total_hours = Some(6.5);

    let groups = group_for_report(&[e, zero]);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].month, "March");
    assert_eq!(groups[0].week, 3);
    assert!((groups[0].total_hours - 14.5).abs() < 1e-9);
}

#[test]
fn test_missing_hours_count_as_zero() {
    let mut e = entry(1, "2025-03-10", 2, "March", 0.0);
    e.hours = None;

    let groups = group_for_report(&[e]);
    assert_eq!(groups[0].total_hours, 0.0);
}

#[test]
fn test_unknown_month_sorts_last() {
    let entries = vec![
        entry(1, "2025-03-10", 1, "Sometime", 8.0),
        entry(2, "2025-12-01", 1, "December", 8.0),
    ];

    let groups = group_for_report(&entries);
    assert_eq!(groups[0].month, "December");
    assert_eq!(groups[1].month, "Sometime");
}

#[test]
fn test_week_of_month_uses_sunday_offset() {
    assert_eq!(week_of_month(d("2025-03-01")), 1);
    assert_eq!(week_of_month(d("2025-03-02")), 2);
    assert_eq!(week_of_month(d("2025-06-01")), 1);
    assert_eq!(week_of_month(d("2025-06-30")), 5);
}

#[test]
fn test_month_index_is_zero_based() {
    assert_eq!(month_index("January"), Some(0));
    assert_eq!(month_index("May"), Some(4));
    assert_eq!(month_index("December"), Some(11));
    assert_eq!(month_index("Smarch"), None);
}

#[test]
fn test_parse_range_shapes() {
    assert_eq!(parse_range("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
    assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(
        parse_range("2025-03:2025-04").unwrap(),
        (d("2025-03-01"), d("2025-04-30"))
    );
    assert!(parse_range("2025-04:2025-03").is_err());
    assert!(parse_range("2025:2025-03").is_err());
    assert!(parse_range("March").is_err());
}

#[test]
fn test_summary_totals_and_recent() {
    let mut adjusted = entry(3, "2025-03-12", 2, "March", 8.0);
    adjusted.was_adjusted = true;
    adjusted.adjusted_start_time = Some(t("08:00"));

    let entries = vec![
        entry(1, "2025-03-10", 2, "March", 8.0),
        entry(2, "2025-03-11", 2, "March", 7.5),
        adjusted,
    ];

    let summary = summarize(&entries, 2);

    assert!((summary.total_hours - 23.5).abs() < 1e-9);
    assert_eq!(summary.total_days, 3);
    assert_eq!(summary.adjusted_days, 1);
    let recent: Vec<i64> = summary.recent.iter().map(|e| e.id).collect();
    assert_eq!(recent, vec![3, 2]);
}

#[test]
fn test_summary_total_matches_report_total() {
    let mut legacy = entry(2, "2025-03-11", 2, "March", 0.0);
    legacy.hours = None;
    legacy.total_hours = Some(6.5);

    let entries = vec![entry(1, "2025-03-10", 2, "March", 8.0), legacy];

    let summary = summarize(&entries, 5);
    let report_total: f64 = group_for_report(&entries).iter().map(|g| g.total_hours).sum();

    assert!((summary.total_hours - 14.5).abs() < 1e-9);
    assert!((summary.total_hours - report_total).abs() < 1e-9);
}
