//! YAML parsing with diagnostics

pub mod diagnostics;

pub use diagnostics::{YamlError, YamlSyntaxError};

use miette::{IntoDiagnostic, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parse a YAML file into the given type, with source-located errors
pub fn parse_yaml_file<T: DeserializeOwned + 'static>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).into_diagnostic()?;
    parse_yaml_str(&content, &path.display().to_string())
}

/// Parse a YAML string into the given type, with source-located errors
pub fn parse_yaml_str<T: DeserializeOwned + 'static>(content: &str, filename: &str) -> Result<T> {
    serde_yml::from_str(content)
        .map_err(|e| YamlSyntaxError::from_serde_error(&e, content, filename).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_parse_valid_yaml() {
        let parsed: Sample = parse_yaml_str("name: test\ncount: 3\n", "test.yaml").unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.count, 3);
    }

    #[test]
    fn test_parse_invalid_yaml_reports_error() {
        let result: Result<Sample> = parse_yaml_str("name: [unclosed\n", "test.yaml");
        assert!(result.is_err());
    }
}
