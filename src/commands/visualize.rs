//! Visualize command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{ProjectConfig, VisualizeOptions};
use crate::error::DepVizError;

impl FromCommand for VisualizeOptions {
    fn from_command(command: Commands) -> Result<Self> {
        match command {
            Commands::Visualize {
                config,
                metadata,
                format,
                output,
                skip_render,
                highlight_cycles,
            } => {
                let project = ProjectConfig::load(&config.config)?;
                Ok(VisualizeOptions::builder()
                    .with_project(project)
                    .with_format(format)
                    .with_output(output)
                    .with_skip_render(skip_render)
                    .with_highlight_cycles(highlight_cycles)
                    .with_python(metadata.python)
                    .build()?)
            }
            _ => Err(DepVizError::ConfigurationError {
                message: "Invalid command type for VisualizeOptions".to_string(),
            }
            .into()),
        }
    }
}

crate::impl_try_from_command!(VisualizeOptions);

/// Execute the visualize command
pub fn execute_visualize_command(command: Commands) -> Result<()> {
    let config = VisualizeOptions::from_command(command)
        .wrap_err("Failed to load visualize command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::visualize::VisualizeExecutor;
    VisualizeExecutor::execute(config)
}
