//! # Configuration Module
//!
//! - **ProjectConfig**: the project file (`package_name`, `plantuml_path`,
//!   `repo_url`), loaded from JSON or TOML
//! - **VisualizeOptions**: configuration for the `visualize` command
//! - **LineupConfig**: configuration for the `lineup` command
//!
//! ## Example
//!
//! ```
//! use depviz::cli::GraphFormat;
//! use depviz::common::ConfigBuilder;
//! use depviz::config::{ProjectConfig, VisualizeOptions};
//!
//! let project = ProjectConfig::from_json_str(
//!     r#"{"package_name": "requests", "plantuml_path": "plantuml.jar", "repo_url": ""}"#,
//!     "config.json",
//! )
//! .unwrap();
//!
//! let options = VisualizeOptions::builder()
//!     .with_project(project)
//!     .with_format(GraphFormat::PlantUml)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.output.to_str(), Some("dependencies.puml"));
//! ```

pub mod lineup;
pub mod project;
pub mod visualize;

pub use lineup::LineupConfig;
pub use project::ProjectConfig;
pub use visualize::VisualizeOptions;
