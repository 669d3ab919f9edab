//! Visualize command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::config::ProjectConfig;

#[derive(Debug, Clone)]
pub struct VisualizeOptions {
    pub project: ProjectConfig,
    pub format: GraphFormat,
    pub output: PathBuf,
    pub skip_render: bool,
    pub highlight_cycles: bool,
    pub python: String,
}

impl VisualizeOptions {
    pub fn builder() -> VisualizeOptionsBuilder {
        VisualizeOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct VisualizeOptionsBuilder {
    project: Option<ProjectConfig>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    skip_render: Option<bool>,
    highlight_cycles: Option<bool>,
    python: Option<String>,
}

impl VisualizeOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: ProjectConfig) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Diagram file; defaults to the well-known name for the chosen format
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_skip_render(mut self, skip_render: bool) -> Self {
        self.skip_render = Some(skip_render);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }

    pub fn with_python(mut self, python: String) -> Self {
        self.python = Some(python);
        self
    }
}

impl crate::common::ConfigBuilder for VisualizeOptionsBuilder {
    type Config = VisualizeOptions;

    fn build(self) -> Result<Self::Config, crate::error::DepVizError> {
        let format = self.format.ok_or_else(|| {
            crate::error::DepVizError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            }
        })?;

        Ok(VisualizeOptions {
            project: self.project.ok_or_else(|| {
                crate::error::DepVizError::ConfigurationError {
                    message: "Missing required field: project".to_string(),
                }
            })?,
            output: self
                .output
                .unwrap_or_else(|| PathBuf::from(format.default_file_name())),
            format,
            skip_render: self.skip_render.unwrap_or(false),
            highlight_cycles: self.highlight_cycles.unwrap_or(false),
            python: self
                .python
                .unwrap_or_else(|| crate::constants::metadata::DEFAULT_PYTHON.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn project() -> ProjectConfig {
        ProjectConfig {
            package_name: "requests".to_string(),
            plantuml_path: PathBuf::from("plantuml.jar"),
            repo_url: "https://example.com/repo".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let options = VisualizeOptions::builder()
            .with_project(project())
            .with_format(GraphFormat::PlantUml)
            .build()
            .unwrap();

        assert_eq!(options.output, PathBuf::from("dependencies.puml"));
        assert_eq!(options.python, "python3");
        assert!(!options.skip_render);
        assert!(!options.highlight_cycles);
    }

    #[test]
    fn test_default_output_follows_format() {
        let options = VisualizeOptions::builder()
            .with_project(project())
            .with_format(GraphFormat::Mermaid)
            .build()
            .unwrap();

        assert_eq!(options.output, PathBuf::from("dependencies.mmd"));
    }

    #[test]
    fn test_explicit_output() {
        let options = VisualizeOptions::builder()
            .with_project(project())
            .with_format(GraphFormat::Dot)
            .with_output(Some(PathBuf::from("out/graph.dot")))
            .build()
            .unwrap();

        assert_eq!(options.output, PathBuf::from("out/graph.dot"));
    }

    #[test]
    fn test_missing_project() {
        let err = VisualizeOptions::builder()
            .with_format(GraphFormat::Dot)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("project"));
    }
}
