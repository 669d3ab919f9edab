//! Core graph types
//!
//! This module contains the fundamental data structures produced by the
//! dependency traversal.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

/// Mapping from a package name to the names of its direct requirements
///
/// Keys are the packages whose metadata was fetched successfully. A name that
/// only appears inside a requirement set was either never reached or failed to
/// fetch. Both levels are ordered, so iteration (and therefore rendering) is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyMap {
    packages: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the requirement set of `package`
    ///
    /// Blank requirement names are discarded. Returns `false` and leaves the
    /// map untouched if `package` is already present.
    pub fn insert<I, S>(&mut self, package: &str, requirements: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.packages.contains_key(package) {
            return false;
        }

        let requirements = requirements
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| !name.trim().is_empty())
            .collect();
        self.packages.insert(package.to_string(), requirements);
        true
    }

    pub fn get(&self, package: &str) -> Option<&BTreeSet<String>> {
        self.packages.get(package)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.packages
            .iter()
            .map(|(package, requirements)| (package.as_str(), requirements))
    }

    /// Every `(package, requirement)` pair in enumeration order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().flat_map(|(package, requirements)| {
            requirements
                .iter()
                .map(move |requirement| (package, requirement.as_str()))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.packages.values().map(BTreeSet::len).sum()
    }

    /// Requirement names that never became keys
    pub fn unresolved(&self) -> BTreeSet<&str> {
        self.packages
            .values()
            .flatten()
            .map(String::as_str)
            .filter(|name| !self.packages.contains_key(*name))
            .collect()
    }

    /// Convert the mapping into a `petgraph` directed graph
    ///
    /// Every key and every requirement name becomes exactly one node.
    pub fn to_graph(&self) -> DiGraph<PackageNode, ()> {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        let names = self
            .packages
            .keys()
            .map(String::as_str)
            .chain(self.unresolved());
        for name in names {
            let idx = graph.add_node(PackageNode::new(name, self.contains(name)));
            indices.insert(name, idx);
        }

        for (from, to) in self.edges() {
            graph.add_edge(indices[from], indices[to], ());
        }

        graph
    }
}

impl<K, V> FromIterator<(K, V)> for DependencyMap
where
    K: AsRef<str>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = DependencyMap::new();
        for (package, requirements) in iter {
            map.insert(package.as_ref(), requirements);
        }
        map
    }
}

/// Node weight of the graph returned by [`DependencyMap::to_graph`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    pub name: String,
    /// Whether the package's own metadata was fetched
    pub resolved: bool,
}

impl PackageNode {
    pub fn new(name: &str, resolved: bool) -> Self {
        Self {
            name: name.to_string(),
            resolved,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}
