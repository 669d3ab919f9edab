//! Lineup command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{LineupConfig, ProjectConfig};
use crate::error::DepVizError;

impl FromCommand for LineupConfig {
    fn from_command(command: Commands) -> Result<Self> {
        match command {
            Commands::Lineup {
                config,
                metadata,
                format,
            } => {
                let project = ProjectConfig::load(&config.config)?;
                Ok(LineupConfig::builder()
                    .with_project(project)
                    .with_format(format)
                    .with_python(metadata.python)
                    .build()?)
            }
            _ => Err(DepVizError::ConfigurationError {
                message: "Invalid command type for LineupConfig".to_string(),
            }
            .into()),
        }
    }
}

crate::impl_try_from_command!(LineupConfig);

/// Execute the lineup command
pub fn execute_lineup_command(command: Commands) -> Result<()> {
    let config = LineupConfig::from_command(command)
        .wrap_err("Failed to load lineup command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::lineup::LineupExecutor;
    LineupExecutor::execute(config)
}
