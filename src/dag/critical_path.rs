// src/dag/critical_path.rs

//! Longest-path analysis over the dependency DAG.
//!
//! The path is found with a single Kahn's-algorithm pass: every node starts
//! with its own planned duration, and each edge relaxes the dependent's
//! cumulative finish. A topological order that fails to cover every node
//! means the visible tasks contain a cycle, which is reported as
//! [`CriticalPath::CycleDetected`] rather than as an error.

use std::collections::VecDeque;

use petgraph::Direction;
use petgraph::graph::NodeIndex;
use serde::Serialize;
use tracing::{debug, info};

use crate::dag::graph::DependencyGraph;
use crate::timeline::TaskRow;
use crate::types::TaskId;

/// Result of critical-path analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CriticalPath {
    /// Longest chain ordered from its first task to its last.
    ///
    /// Empty only when there are no rows.
    Path {
        tasks: Vec<TaskId>,
        length_days: i64,
    },
    /// The dependency graph is cyclic; no path is produced.
    CycleDetected { involved: Vec<TaskId> },
}

impl CriticalPath {
    /// Task ids on the path; empty when a cycle was detected.
    pub fn task_ids(&self) -> &[TaskId] {
        match self {
            CriticalPath::Path { tasks, .. } => tasks,
            CriticalPath::CycleDetected { .. } => &[],
        }
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_ids().contains(id)
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, CriticalPath::CycleDetected { .. })
    }

    /// Cumulative planned duration of the path, 0 for a cycle.
    pub fn length_days(&self) -> i64 {
        match self {
            CriticalPath::Path { length_days, .. } => *length_days,
            CriticalPath::CycleDetected { .. } => 0,
        }
    }
}

/// Find the chain of dependent rows with the largest cumulative planned duration.
pub fn find_critical_path(rows: &[TaskRow]) -> CriticalPath {
    let graph = DependencyGraph::from_rows(rows);
    critical_path_of(&graph)
}

/// Same as [`find_critical_path`] over an already built graph.
pub fn critical_path_of(graph: &DependencyGraph) -> CriticalPath {
    let inner = graph.inner();
    let n = inner.node_count();

    let mut in_degree: Vec<usize> = inner
        .node_indices()
        .map(|node| inner.neighbors_directed(node, Direction::Incoming).count())
        .collect();
    let mut longest: Vec<i64> = inner.node_indices().map(|node| graph.duration(node)).collect();
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; n];

    let mut queue: VecDeque<NodeIndex> = inner
        .node_indices()
        .filter(|node| in_degree[node.index()] == 0)
        .collect();
    let mut processed: Vec<NodeIndex> = Vec::with_capacity(n);

    while let Some(current) = queue.pop_front() {
        processed.push(current);

        for next in graph.sorted_neighbors(current, Direction::Outgoing) {
            let candidate = longest[current.index()] + graph.duration(next);
            if candidate > longest[next.index()] {
                longest[next.index()] = candidate;
                predecessor[next.index()] = Some(current);
            }

            let degree = &mut in_degree[next.index()];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(next);
            }
        }
    }

    if processed.len() != n {
        let involved = graph.cycle_members();
        info!(
            processed = processed.len(),
            nodes = n,
            ?involved,
            "dependency cycle detected; no critical path"
        );
        return CriticalPath::CycleDetected { involved };
    }

    // Strict comparison keeps the first node in topological order on ties.
    let mut best: Option<NodeIndex> = None;
    for &node in &processed {
        match best {
            Some(b) if longest[node.index()] <= longest[b.index()] => {}
            _ => best = Some(node),
        }
    }

    let Some(sink) = best else {
        return CriticalPath::Path {
            tasks: Vec::new(),
            length_days: 0,
        };
    };

    let mut path = vec![inner[sink].clone()];
    let mut cursor = sink;
    while let Some(prev) = predecessor[cursor.index()] {
        path.push(inner[prev].clone());
        cursor = prev;
    }
    path.reverse();

    let length_days = longest[sink.index()];
    debug!(?path, length_days, "critical path found");

    CriticalPath::Path {
        tasks: path,
        length_days,
    }
}
