use ganttline::dag::{CriticalPath, DependencyGraph, find_critical_path};
use ganttline::model::Task;
use ganttline::timeline::{TaskRow, build_rows, compute_window};
use ganttline::types::TaskId;
use ganttline_test_utils::{TaskBuilder, d, init_tracing};

fn rows_for(tasks: &[Task]) -> Vec<TaskRow> {
    let today = d(2026, 3, 1);
    let window = compute_window(tasks, 14, today);
    build_rows(tasks, &window, today)
}

fn ids(list: &[&str]) -> Vec<TaskId> {
    list.iter().map(|s| TaskId::new(*s)).collect()
}

#[test]
fn test_linear_chain_is_the_critical_path() {
    init_tracing();
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 2).build(),
        TaskBuilder::lasting("B", d(2026, 3, 4), 3).after("A").build(),
        TaskBuilder::lasting("C", d(2026, 3, 7), 1).after("B").build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert_eq!(
        path,
        CriticalPath::Path {
            tasks: ids(&["A", "B", "C"]),
            length_days: 6,
        }
    );
}

#[test]
fn test_two_task_cycle_is_reported_not_raised() {
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 2).after("B").build(),
        TaskBuilder::lasting("B", d(2026, 3, 4), 3).after("A").build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert!(path.is_cycle());
    assert!(path.task_ids().is_empty());
    assert_eq!(path.length_days(), 0);
    assert_eq!(
        path,
        CriticalPath::CycleDetected {
            involved: ids(&["A", "B"])
        }
    );
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 2).after("A").build(),
        TaskBuilder::lasting("B", d(2026, 3, 4), 3).build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert_eq!(
        path,
        CriticalPath::CycleDetected {
            involved: ids(&["A"])
        }
    );
}

#[test]
fn test_cycle_members_exclude_downstream_tasks() {
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 1).after("B").build(),
        TaskBuilder::lasting("B", d(2026, 3, 3), 1).after("A").build(),
        TaskBuilder::lasting("C", d(2026, 3, 4), 1).after("B").build(),
        TaskBuilder::lasting("D", d(2026, 3, 5), 9).build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert_eq!(
        path,
        CriticalPath::CycleDetected {
            involved: ids(&["A", "B"])
        }
    );
}

#[test]
fn test_dangling_dependency_is_ignored() {
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 2).after("ghost").build(),
        TaskBuilder::lasting("B", d(2026, 3, 3), 5).build(),
    ];
    let rows = rows_for(&tasks);

    let graph = DependencyGraph::from_rows(&rows);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.dangling().len(), 1);
    assert_eq!(graph.dangling()[0].task, TaskId::new("A"));
    assert_eq!(graph.dangling()[0].missing, TaskId::new("ghost"));
    assert!(graph.dependencies_of(&TaskId::new("A")).is_empty());

    let path = find_critical_path(&rows);
    assert_eq!(path.task_ids(), ids(&["B"]).as_slice());
    assert_eq!(path.length_days(), 5);
}

#[test]
fn test_dangling_dependency_keeps_real_edges() {
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 2).build(),
        TaskBuilder::lasting("B", d(2026, 3, 4), 2)
            .after("A")
            .after("other-project-task")
            .build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert_eq!(path.task_ids(), ids(&["A", "B"]).as_slice());
}

#[test]
fn test_empty_rows_give_empty_path_not_cycle() {
    let path = find_critical_path(&[]);

    assert!(!path.is_cycle());
    assert!(path.task_ids().is_empty());
    assert_eq!(path.length_days(), 0);
}

#[test]
fn test_long_independent_task_beats_short_chain() {
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 2).build(),
        TaskBuilder::lasting("B", d(2026, 3, 4), 3).after("A").build(),
        TaskBuilder::lasting("X", d(2026, 3, 2), 10).build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert_eq!(path.task_ids(), ids(&["X"]).as_slice());
    assert_eq!(path.length_days(), 10);
}

#[test]
fn test_diamond_follows_longer_branch() {
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 1).build(),
        TaskBuilder::lasting("B", d(2026, 3, 3), 5).after("A").build(),
        TaskBuilder::lasting("C", d(2026, 3, 3), 2).after("A").build(),
        TaskBuilder::lasting("D", d(2026, 3, 8), 1).after("B").after("C").build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert_eq!(path.task_ids(), ids(&["A", "B", "D"]).as_slice());
    assert_eq!(path.length_days(), 7);
    assert!(!path.contains(&TaskId::new("C")));
}

#[test]
fn test_ties_resolve_to_first_in_topological_order() {
    let tasks = vec![
        TaskBuilder::lasting("P", d(2026, 3, 2), 3).build(),
        TaskBuilder::lasting("Q", d(2026, 3, 3), 3).build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert_eq!(path.task_ids(), ids(&["P"]).as_slice());
}

#[test]
fn test_repeated_dependency_collapses_to_one_edge() {
    let tasks = vec![
        TaskBuilder::lasting("A", d(2026, 3, 2), 2).build(),
        TaskBuilder::lasting("B", d(2026, 3, 4), 2).after("A").after("A").build(),
    ];
    let rows = rows_for(&tasks);

    let graph = DependencyGraph::from_rows(&rows);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(&TaskId::new("A"), &TaskId::new("B")));
    assert!(!graph.has_edge(&TaskId::new("B"), &TaskId::new("A")));

    let path = find_critical_path(&rows);
    assert_eq!(path.task_ids(), ids(&["A", "B"]).as_slice());
}

#[test]
fn test_graph_neighbors_follow_row_order() {
    let tasks = vec![
        TaskBuilder::lasting("root", d(2026, 3, 2), 1).build(),
        TaskBuilder::lasting("late-child", d(2026, 3, 9), 1).after("root").build(),
        TaskBuilder::lasting("early-child", d(2026, 3, 3), 1).after("root").build(),
    ];
    let rows = rows_for(&tasks);

    let graph = DependencyGraph::from_rows(&rows);
    let dependents: Vec<&str> = graph
        .dependents_of(&TaskId::new("root"))
        .into_iter()
        .map(|id| id.as_str())
        .collect();

    assert_eq!(dependents, vec!["early-child", "late-child"]);
    assert_eq!(
        graph.dependencies_of(&TaskId::new("late-child")),
        vec![&TaskId::new("root")]
    );
    let order: Vec<&str> = graph.tasks().map(|t| t.as_str()).collect();
    assert_eq!(order, vec!["root", "early-child", "late-child"]);
}

#[test]
fn test_reversed_dates_count_as_one_day() {
    let tasks = vec![
        TaskBuilder::new("A", d(2026, 3, 9), d(2026, 3, 2)).build(),
        TaskBuilder::lasting("B", d(2026, 3, 10), 2).after("A").build(),
    ];

    let path = find_critical_path(&rows_for(&tasks));

    assert_eq!(path.task_ids(), ids(&["A", "B"]).as_slice());
    assert_eq!(path.length_days(), 3);
}
