//! Lineup command configuration

use crate::cli::OutputFormat;
use crate::config::ProjectConfig;

#[derive(Debug, Clone)]
pub struct LineupConfig {
    pub project: ProjectConfig,
    pub format: OutputFormat,
    pub python: String,
}

impl LineupConfig {
    pub fn builder() -> LineupConfigBuilder {
        LineupConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct LineupConfigBuilder {
    project: Option<ProjectConfig>,
    format: Option<OutputFormat>,
    python: Option<String>,
}

impl LineupConfigBuilder {
    pub fn with_project(mut self, project: ProjectConfig) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_python(mut self, python: String) -> Self {
        self.python = Some(python);
        self
    }
}

impl crate::common::ConfigBuilder for LineupConfigBuilder {
    type Config = LineupConfig;

    fn build(self) -> Result<Self::Config, crate::error::DepVizError> {
        Ok(LineupConfig {
            project: self.project.ok_or_else(|| {
                crate::error::DepVizError::ConfigurationError {
                    message: "Missing required field: project".to_string(),
                }
            })?,
            format: self.format.unwrap_or(OutputFormat::Human),
            python: self
                .python
                .unwrap_or_else(|| crate::constants::metadata::DEFAULT_PYTHON.to_string()),
        })
    }
}
