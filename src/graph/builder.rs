use std::collections::HashSet;

use miette::Result;

use super::types::DependencyMap;
use crate::error::DepVizError;
use crate::metadata::{FetchFailure, MetadataSource, parse_requirements};
use crate::progress::ProgressReporter;

/// Builder for discovering the transitive dependency graph of a package
///
/// The traversal is depth-first and pre-order: a package's requirements are
/// explored in the order its metadata lists them, each fully before the next.
/// Every distinct name is queried at most once, which both breaks requirement
/// cycles and collapses diamonds.
pub struct DependencyGraphBuilder<S> {
    source: S,
    dependencies: DependencyMap,
    failures: Vec<FetchFailure>,
    visit_order: Vec<String>,
    skipped_revisits: usize,
}

impl<S: MetadataSource> DependencyGraphBuilder<S> {
    /// Create a new builder querying `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            dependencies: DependencyMap::new(),
            failures: Vec::new(),
            visit_order: Vec::new(),
            skipped_revisits: 0,
        }
    }

    /// Discover every package reachable from `root`
    ///
    /// Results of a previous call are discarded. A package whose query fails
    /// is recorded in [`failures`](Self::failures), gets no entry in the map
    /// and is not explored further; the rest of the traversal continues. The
    /// only error is an empty root name.
    pub fn build_graph(&mut self, root: &str, progress: Option<&ProgressReporter>) -> Result<()> {
        let root = root.trim();
        if root.is_empty() {
            return Err(DepVizError::ConfigurationError {
                message: "package name must not be empty".to_string(),
            }
            .into());
        }

        let mut visited: HashSet<String> = HashSet::new();
        let mut dependencies = DependencyMap::new();
        let mut failures = Vec::new();
        let mut visit_order = Vec::new();
        let mut skipped_revisits = 0;

        // Requirements are pushed in reverse so the first listed one is popped
        // next, matching a recursive pre-order walk.
        let mut worklist = vec![root.to_string()];

        while let Some(package) = worklist.pop() {
            if visited.contains(&package) {
                skipped_revisits += 1;
                continue;
            }
            visited.insert(package.clone());
            visit_order.push(package.clone());

            if let Some(p) = progress {
                p.fetching_package(&package);
            }

            let metadata = match self.source.fetch_metadata(&package) {
                Ok(metadata) => metadata,
                Err(failure) => {
                    if let Some(p) = progress {
                        p.package_failed(&failure);
                    }
                    failures.push(failure);
                    continue;
                }
            };

            let requirements = parse_requirements(&metadata);
            dependencies.insert(&package, requirements.iter().cloned());
            worklist.extend(requirements.into_iter().rev());
        }

        self.dependencies = dependencies;
        self.failures = failures;
        self.visit_order = visit_order;
        self.skipped_revisits = skipped_revisits;

        Ok(())
    }

    /// Get the discovered dependency map
    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    pub fn into_dependencies(self) -> DependencyMap {
        self.dependencies
    }

    /// Packages whose metadata query failed, in visit order
    pub fn failures(&self) -> &[FetchFailure] {
        &self.failures
    }

    /// Every package that was queried, in the order it was queried
    pub fn visit_order(&self) -> &[String] {
        &self.visit_order
    }

    /// Number of times an already visited package was reached again
    pub fn skipped_revisits(&self) -> usize {
        self.skipped_revisits
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Build the dependency map rooted at `root` in one call
pub fn build_dependency_map<S: MetadataSource>(source: S, root: &str) -> Result<DependencyMap> {
    let mut builder = DependencyGraphBuilder::new(source);
    builder.build_graph(root, None)?;
    Ok(builder.into_dependencies())
}
