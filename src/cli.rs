use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{ConfigArgs, MetadataArgs};
use crate::constants::output;

#[derive(Parser)]
#[command(
    name = "depviz",
    about = "Visualize the transitive dependency graph of a Python package",
    long_about = "depviz queries `pip show` for a package and, recursively, for every package it \
                  requires. The resulting dependency graph is written as a PlantUML description \
                  and handed to PlantUML to produce an image. Cyclic and shared requirements are \
                  queried only once.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the dependency graph and render it as a diagram
    ///
    /// Collects the dependency graph of the configured package, writes the
    /// diagram description to a file and runs the configured renderer on it.
    #[command(
        long_about = "Collect the dependency graph of the package named in the configuration \
                      file, write it as a diagram description (PlantUML by default) and run the \
                      configured PlantUML renderer on the result. Packages that pip cannot \
                      describe are reported and skipped; the rest of the graph is still drawn."
    )]
    Visualize {
        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        metadata: MetadataArgs,

        /// Diagram format
        #[arg(
            short,
            long,
            value_enum,
            default_value = output::DEFAULT_GRAPH_FORMAT,
            env = "DEPVIZ_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Diagram file (defaults to dependencies.puml, .dot or .mmd)
        #[arg(short, long, env = "DEPVIZ_OUTPUT")]
        output: Option<PathBuf>,

        /// Write the diagram description without running the renderer
        #[arg(long, env = "DEPVIZ_SKIP_RENDER")]
        skip_render: bool,

        /// Highlight requirement cycles in the diagram
        #[arg(long, env = "DEPVIZ_HIGHLIGHT_CYCLES")]
        highlight_cycles: bool,
    },

    /// List the collected dependencies without drawing anything
    ///
    /// Shows every package that was described, its direct requirements,
    /// packages that could not be queried and any requirement cycles.
    #[command(
        long_about = "Collect the dependency graph of the configured package and print it as a \
                      report instead of a diagram. The report lists each package with its direct \
                      requirements, the packages pip could not describe, and requirement cycles. \
                      Use --format json for machine-readable output."
    )]
    Lineup {
        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        metadata: MetadataArgs,

        /// Report format
        #[arg(
            short,
            long,
            value_enum,
            default_value = output::DEFAULT_REPORT_FORMAT,
            env = "DEPVIZ_FORMAT"
        )]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum GraphFormat {
    #[value(name = "plantuml")]
    PlantUml,
    Dot,
    Mermaid,
}

impl GraphFormat {
    /// Well-known diagram file name for this format
    pub fn default_file_name(self) -> &'static str {
        match self {
            GraphFormat::PlantUml => output::PLANTUML_FILE,
            GraphFormat::Dot => output::DOT_FILE,
            GraphFormat::Mermaid => output::MERMAID_FILE,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GraphFormat::PlantUml => "PlantUML",
            GraphFormat::Dot => "DOT",
            GraphFormat::Mermaid => "Mermaid",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_visualize_defaults() {
        let cli = Cli::try_parse_from(["depviz", "visualize", "config.json"]).unwrap();

        match cli.command {
            Commands::Visualize {
                config,
                metadata,
                format,
                output,
                skip_render,
                highlight_cycles,
            } => {
                assert_eq!(config.config, PathBuf::from("config.json"));
                assert_eq!(metadata.python, "python3");
                assert_eq!(format, GraphFormat::PlantUml);
                assert!(output.is_none());
                assert!(!skip_render);
                assert!(!highlight_cycles);
            }
            _ => panic!("Expected visualize command"),
        }
    }

    #[test]
    fn test_parse_lineup_json() {
        let cli = Cli::try_parse_from([
            "depviz",
            "lineup",
            "config.toml",
            "--format",
            "json",
            "--python",
            "python3.12",
        ])
        .unwrap();

        match cli.command {
            Commands::Lineup {
                format, metadata, ..
            } => {
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(metadata.python, "python3.12");
            }
            _ => panic!("Expected lineup command"),
        }
    }

    #[test]
    fn test_missing_config_is_usage_error() {
        assert!(Cli::try_parse_from(["depviz", "visualize"]).is_err());
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(GraphFormat::PlantUml.default_file_name(), "dependencies.puml");
        assert_eq!(GraphFormat::Dot.default_file_name(), "dependencies.dot");
        assert_eq!(GraphFormat::Mermaid.default_file_name(), "dependencies.mmd");
    }
}
