//! Lineup command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::LineupConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::DependencyGraphBuilder;
use crate::metadata::{MetadataSource, PipShowSource};
use crate::progress::ProgressReporter;
use crate::reports::{
    HumanReportGenerator, JsonReportGenerator, ReportGenerator, TraversalReport,
};

pub struct LineupExecutor;

impl CommandExecutor for LineupExecutor {
    type Config = LineupConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let source = PipShowSource::new(&config.python);
        let report = Self::generate_with(&config, source)?;
        println!("{report}");
        Ok(())
    }
}

impl LineupExecutor {
    /// Collect the dependency graph from `source` and format the report
    pub fn generate_with<S: MetadataSource>(config: &LineupConfig, source: S) -> Result<String> {
        let mut progress = ProgressReporter::new();
        let root = config.project.package_name();

        progress.start_traversal(root);
        let mut builder = DependencyGraphBuilder::new(source);
        let built = builder.build_graph(root, Some(&progress));
        progress.finish_traversal(
            builder.dependencies().len(),
            builder.failures().len(),
            builder.skipped_revisits(),
        );
        built.wrap_err("Failed to collect dependencies")?;

        let mut detector = CycleDetector::new();
        detector
            .detect_cycles(builder.dependencies())
            .wrap_err("Failed to detect cycles")?;

        let report = TraversalReport {
            root,
            repo_url: &config.project.repo_url,
            dependencies: builder.dependencies(),
            failures: builder.failures(),
            cycles: detector.cycles(),
        };

        let output = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&report),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report),
        };
        output.wrap_err("Failed to generate report")
    }
}
