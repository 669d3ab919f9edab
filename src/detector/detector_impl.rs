use std::collections::HashSet;

use miette::Result;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::graph::{DependencyMap, PackageNode};

/// Detector for finding requirement cycles in a dependency map
///
/// Uses Tarjan's Strongly Connected Components algorithm. Every component
/// with more than one package, and every package that requires itself, is
/// reported as one cycle.
pub struct CycleDetector {
    cycles: Vec<PackageCycle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCycle {
    package_names: Vec<String>,
    edges: Vec<CycleEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleEdge {
    pub from_package: String,
    pub to_package: String,
}

impl CycleEdge {
    pub fn new(from_package: &str, to_package: &str) -> Self {
        Self {
            from_package: from_package.to_string(),
            to_package: to_package.to_string(),
        }
    }

    pub fn from_package(&self) -> &str {
        &self.from_package
    }

    pub fn to_package(&self) -> &str {
        &self.to_package
    }
}

impl PackageCycle {
    /// Create a cycle from its edges; package names are derived and sorted
    pub fn from_edges(mut edges: Vec<CycleEdge>) -> Self {
        edges.sort();
        edges.dedup();

        let mut package_names: Vec<String> = edges
            .iter()
            .flat_map(|edge| [edge.from_package.clone(), edge.to_package.clone()])
            .collect();
        package_names.sort();
        package_names.dedup();

        Self {
            package_names,
            edges,
        }
    }

    pub fn package_names(&self) -> &[String] {
        &self.package_names
    }

    pub fn edges(&self) -> &[CycleEdge] {
        &self.edges
    }

    pub fn contains_package(&self, name: &str) -> bool {
        self.package_names.iter().any(|p| p == name)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.from_package == from && edge.to_package == to)
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Detect all cycles in the dependency map
    ///
    /// Results from a previous call are replaced. Cycles are ordered by their
    /// smallest package name.
    pub fn detect_cycles(&mut self, dependencies: &DependencyMap) -> Result<()> {
        let graph = dependencies.to_graph();
        self.cycles.clear();

        for scc in tarjan_scc(&graph) {
            if let Some(cycle) = Self::cycle_from_component(&graph, &scc) {
                self.cycles.push(cycle);
            }
        }

        self.cycles
            .sort_by(|a, b| a.package_names().cmp(b.package_names()));
        Ok(())
    }

    fn cycle_from_component(
        graph: &DiGraph<PackageNode, ()>,
        scc: &[NodeIndex],
    ) -> Option<PackageCycle> {
        let members: HashSet<NodeIndex> = scc.iter().copied().collect();
        let mut edges = Vec::new();

        for &from_idx in scc {
            for edge in graph.edges(from_idx) {
                let to_idx = edge.target();
                // A single-node component only counts when it requires itself
                if members.contains(&to_idx) && (scc.len() > 1 || to_idx == from_idx) {
                    edges.push(CycleEdge::new(graph[from_idx].name(), graph[to_idx].name()));
                }
            }
        }

        if edges.is_empty() {
            None
        } else {
            Some(PackageCycle::from_edges(edges))
        }
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[PackageCycle] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn detect(dependencies: &DependencyMap) -> CycleDetector {
        let mut detector = CycleDetector::new();
        detector.detect_cycles(dependencies).unwrap();
        detector
    }

    #[test]
    fn test_no_cycles_in_linear_graph() {
        let deps = DependencyMap::from_iter([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec![])]);

        let detector = detect(&deps);
        assert_eq!(detector.cycle_count(), 0);
        assert!(!detector.has_cycles());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let deps = DependencyMap::from_iter([
            ("p", vec!["a", "b"]),
            ("a", vec!["c"]),
            ("b", vec!["c"]),
            ("c", vec![]),
        ]);

        assert!(!detect(&deps).has_cycles());
    }

    #[test]
    fn test_simple_two_node_cycle() {
        let deps = DependencyMap::from_iter([("a", vec!["b"]), ("b", vec!["a"])]);

        let detector = detect(&deps);
        assert_eq!(detector.cycle_count(), 1);

        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.package_names(), &["a", "b"]);
        assert_eq!(cycle.edges().len(), 2);
        assert!(cycle.contains_edge("a", "b"));
        assert!(cycle.contains_edge("b", "a"));
    }

    #[test]
    fn test_three_node_cycle_excludes_tail() {
        let deps = DependencyMap::from_iter([
            ("a", vec!["b", "tail"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
            ("tail", vec![]),
        ]);

        let detector = detect(&deps);
        assert_eq!(detector.cycle_count(), 1);

        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.package_names(), &["a", "b", "c"]);
        assert!(!cycle.contains_package("tail"));
        assert!(!cycle.contains_edge("a", "tail"));
    }

    #[test]
    fn test_self_requirement_is_a_cycle() {
        let deps = DependencyMap::from_iter([("narcissus", vec!["narcissus"])]);

        let detector = detect(&deps);
        assert_eq!(detector.cycle_count(), 1);
        assert_eq!(detector.cycles()[0].package_names(), &["narcissus"]);
    }

    #[test]
    fn test_multiple_cycles_are_sorted() {
        let deps = DependencyMap::from_iter([
            ("y", vec!["z"]),
            ("z", vec!["y"]),
            ("a", vec!["b"]),
            ("b", vec!["a"]),
        ]);

        let detector = detect(&deps);
        let firsts: Vec<&str> = detector
            .cycles()
            .iter()
            .map(|cycle| cycle.package_names()[0].as_str())
            .collect();
        assert_eq!(firsts, vec!["a", "y"]);
    }

    #[test]
    fn test_detect_replaces_previous_results() {
        let mut detector = CycleDetector::new();
        detector
            .detect_cycles(&DependencyMap::from_iter([("a", vec!["a"])]))
            .unwrap();
        detector.detect_cycles(&DependencyMap::new()).unwrap();

        assert!(!detector.has_cycles());
    }
}
