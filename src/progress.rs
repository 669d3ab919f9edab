use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::metadata::FetchFailure;
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Human-facing progress and diagnostic output on stderr
///
/// Per-package callbacks take `&self` so the traversal can report through a
/// shared reference.
pub struct ProgressReporter {
    term: Term,
    queried: AtomicUsize,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            queried: AtomicUsize::new(0),
            current_bar: None,
        }
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let mut frames: Vec<&str> = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&frames),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_traversal(&mut self, root: &str) {
        let _ = self.term.clear_line();
        self.queried.store(0, Ordering::Relaxed);
        eprintln!(
            "{} Collecting dependencies for package {}...",
            style("🔍").cyan(),
            style(root).green().bold()
        );
        let spinner = self.create_spinner(&format!("Querying {root}..."));
        self.current_bar = Some(spinner);
    }

    pub fn fetching_package(&self, name: &str) {
        let count = self.queried.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Querying {name} ({count} so far)..."));
        }
    }

    pub fn package_failed(&self, failure: &FetchFailure) {
        let line = format!(
            "{} Could not get information about package {}: {}",
            style("⚠").yellow().bold(),
            style(failure.package()).yellow(),
            style(failure.reason()).dim()
        );
        match self.current_bar {
            // println is a no-op on hidden bars, so suspend instead
            Some(ref pb) => pb.suspend(|| eprintln!("{line}")),
            None => eprintln!("{line}"),
        }
    }

    pub fn finish_traversal(&mut self, packages: usize, failures: usize, skipped_revisits: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();

        if packages == 0 {
            eprintln!("{} No package metadata could be collected", style("✗").red());
        } else {
            eprintln!(
                "{} Collected {} {}",
                style("✓").green(),
                style(packages).yellow().bold(),
                pluralize("package", packages)
            );
        }
        if failures > 0 {
            eprintln!(
                "{} {} {} could not be queried",
                style("⚠").yellow().bold(),
                style(failures).red().bold(),
                pluralize("package", failures)
            );
        }
        if skipped_revisits > 0 {
            eprintln!(
                "  {} {} already visited {} skipped",
                style("↺").dim(),
                skipped_revisits,
                pluralize("requirement", skipped_revisits)
            );
        }
    }

    pub fn cycles_found(&self, cycles: usize) {
        if cycles > 0 {
            eprintln!(
                "{} Found {} requirement {}",
                style("⚠").yellow().bold(),
                style(cycles).red().bold(),
                pluralize("cycle", cycles)
            );
        }
    }

    pub fn start_rendering(&self, format: &str) {
        eprintln!("{} Generating {format}...", style("📊").cyan());
    }

    pub fn diagram_written(&self, path: &Path) {
        eprintln!(
            "{} Diagram written to {}",
            style("✓").green(),
            style(path.display()).bold()
        );
    }

    pub fn start_renderer(&self, tool: &str) {
        eprintln!("{} Rendering graph with {}...", style("🖼").cyan(), style(tool).dim());
    }

    pub fn renderer_skipped(&self, reason: &str) {
        eprintln!("{} Renderer skipped: {reason}", style("ℹ").blue());
    }

    pub fn renderer_failed(&self, message: &str) {
        eprintln!("{} Renderer did not succeed: {message}", style("⚠").yellow().bold());
    }

    pub fn finish(&self) {
        eprintln!("{} Dependency graph created", style("✓").green().bold());
    }
}
