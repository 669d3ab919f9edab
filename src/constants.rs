//! Configuration constants for depviz
//!
//! Defaults that can be overridden through command-line flags or environment
//! variables.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while packages are being queried
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Metadata query configuration
pub mod metadata {
    /// Interpreter used to run `pip show`
    pub const DEFAULT_PYTHON: &str = "python3";
}

/// Output formatting configuration
pub mod output {
    /// Default diagram format
    pub const DEFAULT_GRAPH_FORMAT: &str = "plantuml";

    /// Default report format for `lineup`
    pub const DEFAULT_REPORT_FORMAT: &str = "human";

    /// Diagram file names, one per diagram format
    pub const PLANTUML_FILE: &str = "dependencies.puml";
    pub const DOT_FILE: &str = "dependencies.dot";
    pub const MERMAID_FILE: &str = "dependencies.mmd";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 4);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_GRAPH_FORMAT, "plantuml");
        assert_eq!(output::DEFAULT_REPORT_FORMAT, "human");
        assert_eq!(output::PLANTUML_FILE, "dependencies.puml");
    }
}
