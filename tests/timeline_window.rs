use ganttline::model::Task;
use ganttline::timeline::compute_window;
use ganttline_test_utils::{TaskBuilder, d, init_tracing};

#[test]
fn test_empty_snapshot_starts_today_with_minimum_length() {
    init_tracing();
    let today = d(2026, 3, 10);

    let window = compute_window(&[], 14, today);

    assert_eq!(window.start, today);
    assert_eq!(window.end, d(2026, 3, 23));
    assert_eq!(window.day_count, 14);
}

#[test]
fn test_short_snapshot_is_padded_and_floored() {
    let today = d(2026, 3, 10);
    let tasks = vec![TaskBuilder::new("A", d(2026, 3, 10), d(2026, 3, 12)).build()];

    let window = compute_window(&tasks, 14, today);

    assert_eq!(window.start, d(2026, 3, 9));
    assert_eq!(window.end, d(2026, 3, 13));
    assert_eq!(window.day_count, 14);
}

#[test]
fn test_window_covers_baseline_actual_and_today() {
    let today = d(2026, 3, 10);
    let tasks = vec![
        TaskBuilder::new("A", d(2026, 3, 5), d(2026, 3, 20))
            .baseline(d(2026, 2, 20), d(2026, 2, 25))
            .actual(d(2026, 3, 1), Some(d(2026, 4, 2)))
            .build(),
    ];

    let window = compute_window(&tasks, 14, today);

    assert_eq!(window.start, d(2026, 2, 19));
    assert_eq!(window.end, d(2026, 4, 3));
    assert_eq!(window.day_count, 44);
}

#[test]
fn test_actual_due_without_start_still_widens_window() {
    let today = d(2026, 3, 10);
    let tasks = vec![
        TaskBuilder::new("A", d(2026, 3, 10), d(2026, 3, 11))
            .actual_due_only(d(2026, 3, 30))
            .build(),
    ];

    let window = compute_window(&tasks, 1, today);

    assert_eq!(window.end, d(2026, 3, 31));
    assert_eq!(window.day_count, 23);
}

#[test]
fn test_today_before_all_tasks_extends_window_start() {
    let today = d(2026, 3, 10);
    let tasks = vec![TaskBuilder::new("A", d(2026, 5, 1), d(2026, 5, 3)).build()];

    let window = compute_window(&tasks, 14, today);

    assert_eq!(window.start, d(2026, 3, 9));
    assert_eq!(window.end, d(2026, 5, 4));
    assert!(window.contains(today));
}

#[test]
fn test_zero_minimum_is_treated_as_one_day() {
    let today = d(2026, 3, 10);

    let window = compute_window(&[] as &[Task], 0, today);

    assert_eq!(window.day_count, 1);
    assert_eq!(window.start, today);
    assert_eq!(window.end, today);
}

#[test]
fn test_reversed_dates_are_still_inside_window() {
    let today = d(2026, 3, 1);
    let tasks = vec![TaskBuilder::new("A", d(2026, 3, 20), d(2026, 3, 5)).build()];

    let window = compute_window(&tasks, 1, today);

    assert!(window.contains(d(2026, 3, 5)));
    assert!(window.contains(d(2026, 3, 20)));
    assert_eq!(window.end, d(2026, 3, 21));
}
