//! Command implementations for the depviz CLI
//!
//! - visualize: collect the dependency graph and render it as a diagram
//! - lineup: collect the dependency graph and print it as a report

pub mod lineup;
pub mod visualize;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Visualize { .. } => visualize::execute_visualize_command(command),
        Commands::Lineup { .. } => lineup::execute_lineup_command(command),
    }
}
