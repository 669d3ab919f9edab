//! Report generation modules for different output formats
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::detector::PackageCycle;
use crate::error::DepVizError;
use crate::graph::DependencyMap;
use crate::metadata::FetchFailure;

/// Everything a single traversal produced, ready to be reported
#[derive(Debug, Clone)]
pub struct TraversalReport<'a> {
    pub root: &'a str,
    pub repo_url: &'a str,
    pub dependencies: &'a DependencyMap,
    pub failures: &'a [FetchFailure],
    pub cycles: &'a [PackageCycle],
}

/// Common trait for all report generators
pub trait ReportGenerator {
    fn generate_report(&self, report: &TraversalReport<'_>) -> Result<String, DepVizError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
