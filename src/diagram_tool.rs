//! External diagram renderer invocation
//!
//! A renderer path ending in `.jar` is run as `java -jar <path> <file>`;
//! anything else is executed directly with the diagram file as its only
//! argument. The caller decides what a failure means; `visualize` treats it as
//! a warning.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::DepVizError;

#[derive(Debug, Clone)]
pub struct DiagramTool {
    renderer: PathBuf,
}

impl DiagramTool {
    pub fn new(renderer: &Path) -> Self {
        Self {
            renderer: renderer.to_path_buf(),
        }
    }

    pub fn is_jar(&self) -> bool {
        self.renderer
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
    }

    /// Short human-readable description of what will be run
    pub fn description(&self) -> String {
        if self.is_jar() {
            format!("java -jar {}", self.renderer.display())
        } else {
            self.renderer.display().to_string()
        }
    }

    fn command(&self, diagram: &Path) -> Command {
        if self.is_jar() {
            let mut command = Command::new("java");
            command.arg("-jar").arg(&self.renderer).arg(diagram);
            command
        } else {
            let mut command = Command::new(&self.renderer);
            command.arg(diagram);
            command
        }
    }

    /// Run the renderer on `diagram` and wait for it to exit
    pub fn run(&self, diagram: &Path) -> Result<ExitStatus, DepVizError> {
        self.command(diagram)
            .status()
            .map_err(|e| DepVizError::RendererError {
                tool: self.description(),
                message: e.to_string(),
            })
    }
}
