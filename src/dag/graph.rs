// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use tracing::warn;

use crate::timeline::TaskRow;
use crate::types::TaskId;

/// A dependency that names a task outside the current row set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingDependency {
    pub task: TaskId,
    pub missing: TaskId,
}

/// Dependency graph over the visible rows.
///
/// Edge direction: dependency -> dependent. For a task B that depends on A we
/// add the edge A -> B. Node indices follow row order, so iteration over
/// nodes is deterministic.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<TaskId, ()>,
    index: HashMap<TaskId, NodeIndex>,
    durations: Vec<i64>,
    dangling: Vec<DanglingDependency>,
}

impl DependencyGraph {
    /// Build the graph from laid-out rows.
    ///
    /// Dependency ids that are not among `rows` produce no edge; they are
    /// remembered in [`DependencyGraph::dangling`] for diagnostics. Repeated
    /// dependency ids collapse into a single edge.
    pub fn from_rows(rows: &[TaskRow]) -> Self {
        let mut graph: DiGraph<TaskId, ()> = DiGraph::with_capacity(rows.len(), rows.len());
        let mut index = HashMap::with_capacity(rows.len());
        let mut durations = Vec::with_capacity(rows.len());
        let mut row_nodes = Vec::with_capacity(rows.len());

        // First pass: one node per distinct task id.
        for row in rows {
            if index.contains_key(&row.id) {
                warn!(task = %row.id, "duplicate task id; keeping first occurrence");
                row_nodes.push(None);
                continue;
            }
            let node = graph.add_node(row.id.clone());
            index.insert(row.id.clone(), node);
            durations.push(row.planned_duration.max(1));
            row_nodes.push(Some(node));
        }

        // Second pass: edges from each dependency to its dependent.
        let mut dangling = Vec::new();
        for (row, node) in rows.iter().zip(row_nodes) {
            let Some(node) = node else {
                continue;
            };
            for dep in &row.dependencies {
                match index.get(dep) {
                    Some(&dep_node) => {
                        graph.update_edge(dep_node, node, ());
                    }
                    None => dangling.push(DanglingDependency {
                        task: row.id.clone(),
                        missing: dep.clone(),
                    }),
                }
            }
        }

        Self {
            graph,
            index,
            durations,
            dangling,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Return all task ids in row order.
    pub fn tasks(&self) -> impl Iterator<Item = &TaskId> {
        self.graph.node_indices().map(|n| &self.graph[n])
    }

    /// Immediate dependencies of a task that are present in the graph.
    pub fn dependencies_of(&self, id: &TaskId) -> Vec<&TaskId> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Immediate dependents of a task (tasks that list this one as a dependency).
    pub fn dependents_of(&self, id: &TaskId) -> Vec<&TaskId> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Whether `dependent` directly depends on `dependency`.
    pub fn has_edge(&self, dependency: &TaskId, dependent: &TaskId) -> bool {
        match (self.index.get(dependency), self.index.get(dependent)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Dependencies that pointed outside the row set.
    pub fn dangling(&self) -> &[DanglingDependency] {
        &self.dangling
    }

    /// Tasks that sit on at least one dependency cycle, in row order.
    ///
    /// A task depending on itself counts as a cycle of length one.
    pub fn cycle_members(&self) -> Vec<TaskId> {
        let mut members: Vec<NodeIndex> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .flatten()
            .collect();
        members.sort();
        members.into_iter().map(|n| self.graph[n].clone()).collect()
    }

    pub(crate) fn inner(&self) -> &DiGraph<TaskId, ()> {
        &self.graph
    }

    pub(crate) fn duration(&self, node: NodeIndex) -> i64 {
        self.durations[node.index()]
    }

    /// Neighbors of `node` sorted by node index, for deterministic traversal.
    pub(crate) fn sorted_neighbors(&self, node: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors_directed(node, dir).collect();
        out.sort();
        out
    }

    fn neighbors(&self, id: &TaskId, dir: Direction) -> Vec<&TaskId> {
        self.index
            .get(id)
            .map(|&n| {
                self.sorted_neighbors(n, dir)
                    .into_iter()
                    .map(|m| &self.graph[m])
                    .collect()
            })
            .unwrap_or_default()
    }
}
