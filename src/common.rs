//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::constants::metadata::DEFAULT_PYTHON;

/// Project configuration file argument shared by all commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the project configuration file (JSON, or TOML with a .toml
    /// extension)
    #[arg(value_name = "CONFIG", env = "DEPVIZ_CONFIG")]
    pub config: PathBuf,
}

/// Metadata query arguments
#[derive(Args, Debug, Clone)]
pub struct MetadataArgs {
    /// Python interpreter used to run `pip show`
    #[arg(long, value_name = "PYTHON", default_value = DEFAULT_PYTHON, env = "DEPVIZ_PYTHON")]
    pub python: String,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepVizError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> miette::Result<Self>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = miette::Report;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
