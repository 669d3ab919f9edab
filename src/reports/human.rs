//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, TraversalReport};
use crate::error::DepVizError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &TraversalReport<'_>) -> Result<String, DepVizError> {
        let mut output = String::new();
        let deps = report.dependencies;

        writeln!(
            output,
            "\n{} Dependencies of {}",
            style("📦").blue(),
            style(report.root).green().bold()
        )?;
        if !report.repo_url.is_empty() {
            writeln!(output, "  Repository: {}", style(report.repo_url).dim())?;
        }
        writeln!(
            output,
            "  {} {}, {} {}\n",
            deps.len(),
            pluralize("package", deps.len()),
            deps.edge_count(),
            pluralize("requirement", deps.edge_count())
        )?;

        for (package, requirements) in deps.iter() {
            writeln!(output, "{}", style(package).bold())?;
            if requirements.is_empty() {
                writeln!(output, "  └── (no requirements)")?;
                continue;
            }

            for (i, requirement) in requirements.iter().enumerate() {
                let prefix = if i == requirements.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let marker = if deps.contains(requirement) {
                    String::new()
                } else {
                    format!(" {}", style("(not described)").yellow())
                };
                writeln!(output, "  {prefix} {requirement}{marker}")?;
            }
        }

        if !report.failures.is_empty() {
            writeln!(
                output,
                "\n{} {} {} could not be queried:",
                style("⚠").yellow().bold(),
                report.failures.len(),
                pluralize("package", report.failures.len())
            )?;
            for failure in report.failures {
                writeln!(
                    output,
                    "  • {}: {}",
                    failure.package(),
                    style(failure.reason()).dim()
                )?;
            }
        }

        if report.cycles.is_empty() {
            writeln!(output, "\n{} No requirement cycles", style("✓").green())?;
        } else {
            writeln!(
                output,
                "\n{} Found {} requirement {}:",
                style("🔄").yellow(),
                style(report.cycles.len()).red().bold(),
                pluralize("cycle", report.cycles.len())
            )?;
            for (i, cycle) in report.cycles.iter().enumerate() {
                writeln!(
                    output,
                    "  #{} {}",
                    i + 1,
                    cycle.package_names().join(" ↔ ")
                )?;
                for edge in cycle.edges() {
                    writeln!(
                        output,
                        "      {} → {}",
                        edge.from_package(),
                        edge.to_package()
                    )?;
                }
            }
        }

        Ok(output)
    }
}
