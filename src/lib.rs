//! # depviz - Visualize Python Package Dependencies
//!
//! depviz discovers the transitive dependency graph of an installed Python
//! package by asking `pip show` about it and, recursively, about everything it
//! requires. The graph is then written as a PlantUML description and handed
//! to PlantUML to produce an image.
//!
//! ## Main Components
//!
//! - **Metadata**: the [`MetadataSource`](metadata::MetadataSource) seam and
//!   the `pip show` adapter
//! - **Graph**: the depth-first, cycle-safe traversal and the diagram renderers
//! - **Detector**: requirement cycle detection (Tarjan's SCC)
//! - **Reports**: human-readable and JSON summaries of a traversal
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use depviz::config::ProjectConfig;
//! use depviz::graph::{DependencyGraphBuilder, GraphRenderer};
//! use depviz::metadata::PipShowSource;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let project = ProjectConfig::load(Path::new("config.json"))?;
//!
//! let mut builder = DependencyGraphBuilder::new(PipShowSource::default());
//! builder.build_graph(project.package_name(), None)?;
//!
//! for failure in builder.failures() {
//!     eprintln!("{failure}");
//! }
//!
//! let text = GraphRenderer::default().render_plantuml_string(builder.dependencies())?;
//! std::fs::write("dependencies.puml", text).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod diagram_tool;
pub mod error;
pub mod executors;
pub mod graph;
pub mod metadata;
pub mod reports;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
