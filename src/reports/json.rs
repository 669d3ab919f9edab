//! JSON format report generation

use serde_json::json;

use super::{ReportGenerator, TraversalReport};
use crate::error::DepVizError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &TraversalReport<'_>) -> Result<String, DepVizError> {
        let failures: Vec<_> = report
            .failures
            .iter()
            .map(|failure| {
                json!({
                    "package": failure.package(),
                    "reason": failure.reason(),
                })
            })
            .collect();

        let cycles: Vec<_> = report
            .cycles
            .iter()
            .map(|cycle| {
                let edges: Vec<_> = cycle
                    .edges()
                    .iter()
                    .map(|edge| {
                        json!({
                            "from": edge.from_package(),
                            "to": edge.to_package(),
                        })
                    })
                    .collect();

                json!({
                    "packages": cycle.package_names(),
                    "edges": edges,
                })
            })
            .collect();

        let output = json!({
            "root": report.root,
            "repo_url": report.repo_url,
            "package_count": report.dependencies.len(),
            "edge_count": report.dependencies.edge_count(),
            "dependencies": report.dependencies,
            "failures": failures,
            "has_cycles": !report.cycles.is_empty(),
            "cycles": cycles,
        });

        serde_json::to_string_pretty(&output).map_err(DepVizError::Json)
    }
}
