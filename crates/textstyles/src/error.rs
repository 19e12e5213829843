//! Error types.
//!
//! Decoding individual attributes never fails: a value that doesn't match
//! reads back as absent. These errors cover turning whole documents into
//! styles and style sheets.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a style or style sheet cannot be built.
#[derive(Debug, Error)]
pub enum TextStyleError {
    /// The document parsed, but its top level is not a mapping.
    #[error("cannot initialize {target} from {found}: expected a mapping")]
    Initialization {
        target: &'static str,
        found: &'static str,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A style sheet file whose extension isn't recognized.
    #[error("unsupported style sheet {path:?}: expected one of .yaml, .yml, .json")]
    UnsupportedExtension { path: PathBuf },
}

impl TextStyleError {
    pub(crate) fn not_a_mapping(target: &'static str, found: &serde_json::Value) -> Self {
        let found = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "a sequence",
            serde_json::Value::Object(_) => "a mapping",
        };
        TextStyleError::Initialization { target, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_error_display() {
        let err = TextStyleError::not_a_mapping("text style", &serde_json::json!([1, 2]));
        let msg = err.to_string();
        assert!(msg.contains("text style"));
        assert!(msg.contains("a sequence"));
    }

    #[test]
    fn test_unsupported_extension_display() {
        let err = TextStyleError::UnsupportedExtension {
            path: PathBuf::from("styles.toml"),
        };
        assert!(err.to_string().contains("styles.toml"));
    }
}
