//! TOML sources with diagnostics

use miette::{NamedSource, SourceSpan};
use serde::de::DeserializeOwned;

use crate::error::{GrandError, TomlParseError};

/// Deserialize `content`, attaching the failing span to parse errors
pub fn parse_toml<T: DeserializeOwned>(content: &str, name: &str) -> Result<T, GrandError> {
    toml::from_str(content).map_err(|e| {
        let span = e
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

        GrandError::TomlParseError(Box::new(TomlParseError {
            file: name.to_string(),
            source_code: NamedSource::new(name, content.to_string()),
            span,
            source: e,
        }))
    })
}

/// Read and deserialize a TOML file
pub fn read_toml<T: DeserializeOwned>(path: &std::path::Path) -> Result<T, GrandError> {
    let content = std::fs::read_to_string(path).map_err(|e| GrandError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_toml(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_parse_toml() {
        let sample: Sample = parse_toml("name = \"grand\"", "inline").unwrap();
        assert_eq!(sample.name, "grand");
    }

    #[test]
    fn test_parse_error_carries_span_and_name() {
        let err = parse_toml::<Sample>("name = ", "inline.toml").unwrap_err();

        match err {
            GrandError::TomlParseError(parse) => {
                assert_eq!(parse.file, "inline.toml");
                assert!(parse.span.is_some());
            }
            other => panic!("Expected TomlParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_toml::<Sample>(std::path::Path::new("/nonexistent/grand.toml")).unwrap_err();

        assert!(matches!(err, GrandError::FileReadError { .. }));
    }
}
