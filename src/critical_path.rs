//! Critical path extraction.
//!
//! The critical path is the dependency chain containing the most
//! activities. Durations play no part in it: a chain of many short
//! activities beats a chain of few long ones. Use it to see the
//! deepest line of dependencies through the project, not the one that
//! takes longest.
//!
//! # Algorithm
//!
//! Dynamic programming over the DAG in topological order. Each node's
//! chain length is one more than the best among its predecessors; the
//! path is recovered by walking best predecessors back from the end
//! node. Ties always resolve to the earliest-declared activity, so the
//! result is stable for a given template. O(V + E).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 24.2
//! (shortest paths in DAGs)

use crate::graph::ActivityGraph;

/// Finds the longest dependency chain, as node indices in chain order.
///
/// `order` must be a full topological order of `graph`. Returns an
/// empty path for an empty graph; an isolated activity is a chain of
/// length one.
pub fn critical_path(graph: &ActivityGraph<'_>, order: &[usize]) -> Vec<usize> {
    if graph.is_empty() {
        return Vec::new();
    }

    let mut chain_len = vec![1usize; graph.len()];
    for &i in order {
        if let Some(best) = graph.predecessors(i).iter().map(|&p| chain_len[p]).max() {
            chain_len[i] = best + 1;
        }
    }

    // First-maximum scan keeps the earliest-declared end node on ties.
    let mut end = 0;
    for i in 1..graph.len() {
        if chain_len[i] > chain_len[end] {
            end = i;
        }
    }

    let mut path = Vec::with_capacity(chain_len[end]);
    let mut current = end;
    path.push(current);
    while let Some(best_pred) = graph
        .predecessors(current)
        .iter()
        .copied()
        .filter(|&p| chain_len[p] + 1 == chain_len[current])
        .min()
    {
        path.push(best_pred);
        current = best_pred;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Phase, ScheduleTemplate, WorkPackage};

    fn template_of(activities: Vec<Activity>) -> ScheduleTemplate {
        let mut wp = WorkPackage::new("WP");
        for activity in activities {
            wp = wp.with_activity(activity);
        }
        ScheduleTemplate::new("test").with_phase(Phase::new("P").with_work_package(wp))
    }

    fn path_ids(template: &ScheduleTemplate) -> Vec<String> {
        let graph = ActivityGraph::build(template);
        let order = graph.topological_order().unwrap();
        critical_path(&graph, &order)
            .into_iter()
            .map(|i| graph.activity(i).id.clone())
            .collect()
    }

    #[test]
    fn test_single_chain() {
        let template = template_of(vec![
            Activity::new("A", "A", 1),
            Activity::new("B", "B", 1).with_dependency("A"),
            Activity::new("C", "C", 1).with_dependency("B"),
        ]);
        assert_eq!(path_ids(&template), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_counts_activities_not_weeks() {
        // A lone 10-week activity loses to a chain of three 1-week ones.
        let template = template_of(vec![
            Activity::new("X", "Long job", 10),
            Activity::new("A", "A", 1),
            Activity::new("B", "B", 1).with_dependency("A"),
            Activity::new("C", "C", 1).with_dependency("B"),
        ]);
        assert_eq!(path_ids(&template), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_diamond_prefers_earliest_branch() {
        let template = template_of(vec![
            Activity::new("A", "A", 1),
            Activity::new("B", "B", 1).with_dependency("A"),
            Activity::new("C", "C", 1).with_dependency("A"),
            Activity::new("D", "D", 1).with_dependencies(["B", "C"]),
        ]);
        // Both A-B-D and A-C-D have three activities; B is declared first.
        assert_eq!(path_ids(&template), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_equal_chains_prefer_earliest_end() {
        let template = template_of(vec![
            Activity::new("A1", "A1", 1),
            Activity::new("A2", "A2", 1).with_dependency("A1"),
            Activity::new("B1", "B1", 1),
            Activity::new("B2", "B2", 1).with_dependency("B1"),
        ]);
        assert_eq!(path_ids(&template), vec!["A1", "A2"]);
    }

    #[test]
    fn test_single_activity() {
        let template = template_of(vec![Activity::new("A", "A", 4)]);
        assert_eq!(path_ids(&template), vec!["A"]);
    }

    #[test]
    fn test_empty_graph() {
        let template = ScheduleTemplate::new("empty");
        assert!(path_ids(&template).is_empty());
    }

    #[test]
    fn test_longer_side_branch_wins() {
        // Main spine A-B-E, side branch A-C-D-E is deeper.
        let template = template_of(vec![
            Activity::new("A", "A", 1),
            Activity::new("B", "B", 1).with_dependency("A"),
            Activity::new("C", "C", 1).with_dependency("A"),
            Activity::new("D", "D", 1).with_dependency("C"),
            Activity::new("E", "E", 1).with_dependencies(["B", "D"]),
        ]);
        assert_eq!(path_ids(&template), vec!["A", "C", "D", "E"]);
    }
}
