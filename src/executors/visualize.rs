//! Visualize command executor

use std::fs::File;
use std::io::{BufWriter, Write};

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::VisualizeOptions;
use crate::detector::CycleDetector;
use crate::diagram_tool::DiagramTool;
use crate::executors::CommandExecutor;
use crate::graph::{DependencyGraphBuilder, GraphRenderer};
use crate::metadata::{MetadataSource, PipShowSource};
use crate::progress::ProgressReporter;

pub struct VisualizeExecutor;

impl CommandExecutor for VisualizeExecutor {
    type Config = VisualizeOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let source = PipShowSource::new(&config.python);
        Self::execute_with(&config, source)
    }
}

impl VisualizeExecutor {
    /// Run the full pipeline against an arbitrary metadata source
    pub fn execute_with<S: MetadataSource>(config: &VisualizeOptions, source: S) -> Result<()> {
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

        let cycles = if config.highlight_cycles {
            let mut detector = CycleDetector::new();
            detector
                .detect_cycles(builder.dependencies())
                .wrap_err("Failed to detect cycles")?;
            progress.cycles_found(detector.cycle_count());
            detector.cycles().to_vec()
        } else {
            Vec::new()
        };

        progress.start_rendering(config.format.display_name());
        let file = File::create(&config.output)
            .into_diagnostic()
            .wrap_err_with(|| {
                format!(
                    "Failed to create output file '{}'",
                    config.output.display()
                )
            })?;
        let mut writer = BufWriter::new(file);
        GraphRenderer::new(config.highlight_cycles)
            .render(config.format, builder.dependencies(), &cycles, &mut writer)
            .wrap_err_with(|| format!("Failed to render {} graph", config.format.display_name()))?;
        writer
            .flush()
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write '{}'", config.output.display()))?;
        progress.diagram_written(&config.output);

        Self::run_renderer(config, &progress);
        progress.finish();

        Ok(())
    }

    /// Best-effort renderer invocation; problems are reported, never returned
    fn run_renderer(config: &VisualizeOptions, progress: &ProgressReporter) {
        if config.skip_render {
            progress.renderer_skipped("--skip-render was given");
            return;
        }
        if config.format != GraphFormat::PlantUml {
            progress.renderer_skipped("only PlantUML diagrams are passed to the renderer");
            return;
        }

        let tool = DiagramTool::new(&config.project.plantuml_path);
        progress.start_renderer(&tool.description());
        match tool.run(&config.output) {
            Ok(status) if status.success() => {}
            Ok(status) => progress.renderer_failed(&format!("exited with {status}")),
            Err(e) => progress.renderer_failed(&e.to_string()),
        }
    }
}
