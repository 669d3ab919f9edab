//! Project configuration file
//!
//! The file supplies the package to analyze, the renderer to run and the
//! project's repository URL. JSON is the primary format; a `.toml` extension
//! selects TOML instead.

use std::path::{Path, PathBuf};

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::error::{ConfigParseError, ConfigSyntaxError, DepVizError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    /// Root package whose dependency graph is discovered
    pub package_name: String,
    /// PlantUML jar (or renderer executable)
    pub plantuml_path: PathBuf,
    /// Repository URL, carried into reports only
    pub repo_url: String,
}

impl ProjectConfig {
    /// Read, parse and validate a project configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| DepVizError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml_str(&content, &path.display().to_string())?
        } else {
            Self::from_json_str(&content, &path.display().to_string())?
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str, file: &str) -> Result<Self, DepVizError> {
        serde_json::from_str(content).map_err(|e| {
            let span = line_col_to_offset(content, e.line(), e.column())
                .map(|offset| SourceSpan::new(offset.into(), 1));
            parse_error(file, content, span, ConfigSyntaxError::Json(e))
        })
    }

    pub fn from_toml_str(content: &str, file: &str) -> Result<Self, DepVizError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
            parse_error(file, content, span, ConfigSyntaxError::Toml(e))
        })
    }

    /// Reject values that would make the traversal or rendering meaningless
    pub fn validate(&self) -> Result<(), DepVizError> {
        if self.package_name.trim().is_empty() {
            return Err(DepVizError::ConfigurationError {
                message: "`package_name` must not be empty".to_string(),
            });
        }
        if self.plantuml_path.as_os_str().is_empty() {
            return Err(DepVizError::ConfigurationError {
                message: "`plantuml_path` must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn package_name(&self) -> &str {
        self.package_name.trim()
    }
}

fn parse_error(
    file: &str,
    content: &str,
    span: Option<SourceSpan>,
    source: ConfigSyntaxError,
) -> DepVizError {
    DepVizError::ConfigParseError(Box::new(ConfigParseError {
        file: file.to_string(),
        source_code: NamedSource::new(file, content.to_string()),
        span,
        source,
    }))
}

/// Convert serde_json's 1-based line/column into a byte offset
fn line_col_to_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 || content.is_empty() {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(content.len() - 1))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const JSON_CONFIG: &str = r#"{
    "package_name": "requests",
    "plantuml_path": "/opt/plantuml/plantuml.jar",
    "repo_url": "https://github.com/psf/requests"
}"#;

    fn expected() -> ProjectConfig {
        ProjectConfig {
            package_name: "requests".to_string(),
            plantuml_path: PathBuf::from("/opt/plantuml/plantuml.jar"),
            repo_url: "https://github.com/psf/requests".to_string(),
        }
    }

    #[test]
    fn test_load_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, JSON_CONFIG).unwrap();

        assert_eq!(ProjectConfig::load(&path).unwrap(), expected());
    }

    #[test]
    fn test_load_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("depviz.toml");
        fs::write(
            &path,
            r#"package_name = "requests"
plantuml_path = "/opt/plantuml/plantuml.jar"
repo_url = "https://github.com/psf/requests"
"#,
        )
        .unwrap();

        assert_eq!(ProjectConfig::load(&path).unwrap(), expected());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = r#"{"package_name": "six", "plantuml_path": "p.jar", "repo_url": "", "extra": 1}"#;
        let config = ProjectConfig::from_json_str(content, "config.json").unwrap();
        assert_eq!(config.package_name(), "six");
    }

    #[test]
    fn test_missing_file() {
        let err = ProjectConfig::load(Path::new("/nonexistent/depviz/config.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_missing_key_is_parse_error() {
        let content = r#"{"package_name": "six", "repo_url": ""}"#;
        let err = ProjectConfig::from_json_str(content, "config.json").unwrap_err();

        match err {
            DepVizError::ConfigParseError(parse) => {
                assert_eq!(parse.file, "config.json");
                assert!(parse.source.to_string().contains("plantuml_path"));
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_json_syntax_error_has_span() {
        let content = "{\n  \"package_name\": ,\n}";
        let err = ProjectConfig::from_json_str(content, "config.json").unwrap_err();

        match err {
            DepVizError::ConfigParseError(parse) => {
                let span = parse.span.expect("span should be present");
                assert!(span.offset() < content.len());
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_syntax_error() {
        let content = "package_name = ";
        let err = ProjectConfig::from_toml_str(content, "depviz.toml").unwrap_err();

        assert!(matches!(err, DepVizError::ConfigParseError(ref p) if p.file == "depviz.toml"));
    }

    #[test]
    fn test_validate_rejects_blank_package() {
        let mut config = expected();
        config.package_name = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("package_name"));
    }

    #[test]
    fn test_validate_rejects_empty_renderer() {
        let mut config = expected();
        config.plantuml_path = PathBuf::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_line_col_to_offset() {
        let content = "ab\ncd\nef";
        assert_eq!(line_col_to_offset(content, 1, 1), Some(0));
        assert_eq!(line_col_to_offset(content, 2, 2), Some(4));
        assert_eq!(line_col_to_offset(content, 3, 10), Some(7));
        assert_eq!(line_col_to_offset(content, 0, 0), None);
    }
}
