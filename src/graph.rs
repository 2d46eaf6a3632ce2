//! Dependency graph over template activities.
//!
//! Builds an index-based graph from a template's activity list and
//! produces a deterministic topological order for date propagation.
//! Dependencies that do not resolve to any activity are collected as
//! dangling references rather than edges; what to do about them is the
//! caller's policy decision.
//!
//! # Algorithm
//!
//! Topological order via Kahn's algorithm with a min-heap over node
//! indices, so ties between ready activities always resolve in template
//! declaration order. Nodes left with positive in-degree afterwards are
//! exactly the ones caught in cycles.
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks", CACM 5(11)
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::models::{Activity, ScheduleTemplate};

/// A dependency reference that resolves to no activity in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRef {
    /// Id of the activity holding the reference.
    pub activity: String,
    /// The id it references.
    pub dependency: String,
}

/// Activity dependency graph, indexed by declaration order.
///
/// Borrows the template; node `i` is the `i`-th activity yielded by
/// [`ScheduleTemplate::walk`]. Duplicate dependency entries are
/// collapsed to a single edge. Self-references are kept as edges so
/// cycle detection reports them.
#[derive(Debug)]
pub struct ActivityGraph<'a> {
    nodes: Vec<&'a Activity>,
    index: HashMap<&'a str, usize>,
    preds: Vec<Vec<usize>>,
    succs: Vec<Vec<usize>>,
    dangling: Vec<DanglingRef>,
}

impl<'a> ActivityGraph<'a> {
    /// Builds the graph from a template.
    ///
    /// When two activities share an id, edges resolve to the first
    /// declaration. Callers that care should validate the template
    /// before building.
    pub fn build(template: &'a ScheduleTemplate) -> Self {
        let nodes: Vec<&'a Activity> = template.activities().collect();

        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(nodes.len());
        for (i, activity) in nodes.iter().enumerate() {
            index.entry(activity.id.as_str()).or_insert(i);
        }

        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut succs: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut dangling = Vec::new();

        for (i, activity) in nodes.iter().enumerate() {
            let mut seen: HashSet<usize> = HashSet::new();
            for dep in &activity.dependencies {
                match index.get(dep.as_str()) {
                    Some(&j) => {
                        if seen.insert(j) {
                            preds[i].push(j);
                            succs[j].push(i);
                        }
                    }
                    None => dangling.push(DanglingRef {
                        activity: activity.id.clone(),
                        dependency: dep.clone(),
                    }),
                }
            }
        }

        Self {
            nodes,
            index,
            preds,
            succs,
            dangling,
        }
    }

    /// Number of activities in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no activities.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The activity at a node index.
    pub fn activity(&self, idx: usize) -> &'a Activity {
        self.nodes[idx]
    }

    /// Node index for an activity id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Predecessor node indices (resolved dependencies).
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        &self.preds[idx]
    }

    /// Successor node indices.
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.succs[idx]
    }

    /// Dependency references that resolved to no activity.
    pub fn dangling(&self) -> &[DanglingRef] {
        &self.dangling
    }

    /// Computes a topological order over the graph.
    ///
    /// Ready nodes are drained smallest-index first, so the order is
    /// fully determined by the template. On failure returns the ids of
    /// every activity caught in a cycle, in declaration order.
    pub fn topological_order(&self) -> Result<Vec<usize>, Vec<String>> {
        let mut in_degree: Vec<usize> = self.preds.iter().map(Vec::len).collect();

        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == 0)
            .map(|(i, _)| Reverse(i))
            .collect();

        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(Reverse(i)) = ready.pop() {
            order.push(i);
            for &succ in &self.succs[i] {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    ready.push(Reverse(succ));
                }
            }
        }

        if order.len() == self.nodes.len() {
            Ok(order)
        } else {
            let cycle = (0..self.nodes.len())
                .filter(|&i| in_degree[i] > 0)
                .map(|i| self.nodes[i].id.clone())
                .collect();
            Err(cycle)
        }
    }
}
