//! # Cycle Detection Module
//!
//! Finds requirement cycles in a discovered dependency map. The traversal
//! itself already survives cycles (every package is queried once); this module
//! makes them visible so they can be reported and highlighted in diagrams.
//!
//! ## Algorithm
//!
//! Tarjan's Strongly Connected Components algorithm from `petgraph`, O(V + E).
//! A component of two or more packages is a cycle, as is a single package that
//! lists itself as a requirement.
//!
//! ## Example
//!
//! ```
//! use depviz::detector::CycleDetector;
//! use depviz::graph::DependencyMap;
//!
//! # fn main() -> miette::Result<()> {
//! let deps = DependencyMap::from_iter([("a", vec!["b"]), ("b", vec!["a"])]);
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&deps)?;
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycles()[0].package_names(), &["a", "b"]);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
