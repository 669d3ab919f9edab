use std::process::Command;

use super::{FetchFailure, MetadataSource};
use crate::constants::metadata::DEFAULT_PYTHON;

/// Metadata source backed by `<python> -m pip show <package>`
///
/// Every call spawns one blocking child process. A non-zero exit status, a
/// spawn failure or non-UTF-8 output all become a [`FetchFailure`].
#[derive(Debug, Clone)]
pub struct PipShowSource {
    python: String,
}

impl Default for PipShowSource {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl PipShowSource {
    pub fn new(python: &str) -> Self {
        Self {
            python: python.to_string(),
        }
    }

    pub fn python(&self) -> &str {
        &self.python
    }

    fn command(&self, package: &str) -> Command {
        let mut command = Command::new(&self.python);
        command.args(["-m", "pip", "show", package]);
        command
    }
}

impl MetadataSource for PipShowSource {
    fn fetch_metadata(&self, package: &str) -> Result<String, FetchFailure> {
        let output = self.command(package).output().map_err(|e| {
            FetchFailure::new(package, format!("could not run '{}': {e}", self.python))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.lines().next().unwrap_or_default().trim();
            let reason = if detail.is_empty() {
                format!("pip show exited with {}", output.status)
            } else {
                format!("pip show exited with {}: {detail}", output.status)
            };
            return Err(FetchFailure::new(package, reason));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| FetchFailure::new(package, "pip show produced non-UTF-8 output"))
    }
}
