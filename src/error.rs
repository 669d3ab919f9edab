use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Syntax error raised by one of the supported project file formats
#[derive(Error, Debug)]
pub enum ConfigSyntaxError {
    #[error(transparent)]
    Json(serde_json::Error),

    #[error(transparent)]
    Toml(toml::de::Error),
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid project configuration in '{file}'")]
#[diagnostic(
    code(depviz::config_parse_error),
    help(
        "The file must define `package_name`, `plantuml_path` and `repo_url`; check the syntax \
         near the highlighted position"
    )
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("problem here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: ConfigSyntaxError,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepVizError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(depviz::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParseError(Box<ConfigParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(depviz::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(depviz::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(code(depviz::io_error), help("Check file permissions and disk space"))]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depviz::config_error),
        help("Usage: depviz visualize <CONFIG>; check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(depviz::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },

    #[error("Failed to run renderer '{tool}': {message}")]
    #[diagnostic(
        code(depviz::renderer_error),
        help("Check that `plantuml_path` points to a PlantUML jar and that java is on PATH")
    )]
    RendererError { tool: String, message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_config_parse_error_display() {
        let source_code = "{ \"package_name\": }";
        let json_err = serde_json::from_str::<serde_json::Value>(source_code).unwrap_err();

        let error = ConfigParseError {
            file: "config.json".to_string(),
            source_code: NamedSource::new("config.json", source_code.to_string()),
            span: Some((18, 1).into()),
            source: ConfigSyntaxError::Json(json_err),
        };

        assert_eq!(
            error.to_string(),
            "Invalid project configuration in 'config.json'"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DepVizError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_configuration_error() {
        let error = DepVizError::ConfigurationError {
            message: "package_name must not be empty".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: package_name must not be empty"
        );
    }

    #[test]
    fn test_renderer_error() {
        let error = DepVizError::RendererError {
            tool: "java".to_string(),
            message: "not found".to_string(),
        };

        assert_eq!(error.to_string(), "Failed to run renderer 'java': not found");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = DepVizError::ConfigurationError {
            message: "missing".to_string(),
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: DepVizError = io_err.into();

        match err {
            DepVizError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: DepVizError = json_err.into();

        match err {
            DepVizError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
