//! Resource-specific error types.

use std::path::PathBuf;

use serde_json::{Value, json};
use thiserror::Error;

/// Errors that can occur while resolving and reading resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The logical key is not in the resource table.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// No candidate directory holds the resource file.
    #[error("{file_name} not found")]
    NotFound {
        key: String,
        file_name: String,
        searched: Vec<PathBuf>,
    },

    /// The bulk scan found no data files at all.
    #[error("No data files found")]
    NoDataFiles { searched: Vec<PathBuf> },

    /// The file exists but does not hold valid JSON.
    #[error("Error loading {file_name}: {message}")]
    Parse { file_name: String, message: String },

    /// An I/O error occurred while reading a file or directory.
    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload holds records that do not match the resource schema.
    #[error("{key} failed schema validation")]
    Validation { key: String, failures: Vec<String> },
}

impl ResourceError {
    /// Create a new "unknown resource" error.
    pub fn unknown(key: impl Into<String>) -> Self {
        Self::UnknownResource(key.into())
    }

    /// Create a new "not found" error listing every directory searched.
    pub fn not_found(
        key: impl Into<String>,
        file_name: impl Into<String>,
        searched: Vec<PathBuf>,
    ) -> Self {
        Self::NotFound {
            key: key.into(),
            file_name: file_name.into(),
            searched,
        }
    }

    /// Create a new "parse" error.
    pub fn parse(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            file_name: file_name.into(),
            message: message.into(),
        }
    }

    /// Create a new I/O error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the "resource absent" family of errors.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::UnknownResource(_) | Self::NotFound { .. } | Self::NoDataFiles { .. }
        )
    }

    /// The JSON error envelope returned to clients.
    pub fn envelope(&self) -> Value {
        match self {
            Self::UnknownResource(key) => json!({
                "error": self.to_string(),
                "resource": key,
            }),
            Self::NotFound { searched, .. } => json!({
                "error": self.to_string(),
                "available_dirs": display_paths(searched),
            }),
            Self::NoDataFiles { searched } => json!({
                "error": self.to_string(),
                "available_paths": display_paths(searched),
                "fallback": "Using default data",
            }),
            Self::Parse { message, .. } => json!({
                "error": self.to_string(),
                "details": message,
            }),
            Self::Io { source, .. } => json!({
                "error": self.to_string(),
                "details": source.to_string(),
            }),
            Self::Validation { failures, .. } => json!({
                "error": self.to_string(),
                "violations": failures,
            }),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_envelope_lists_dirs_in_order() {
        let err = ResourceError::not_found(
            "staff",
            "staff_extensions.json",
            vec![PathBuf::from("backend/data"), PathBuf::from("/srv/kb")],
        );

        assert!(err.is_missing());
        assert_eq!(
            err.envelope(),
            json!({
                "error": "staff_extensions.json not found",
                "available_dirs": ["backend/data", "/srv/kb"],
            })
        );
    }

    #[test]
    fn test_no_data_files_envelope() {
        let err = ResourceError::NoDataFiles {
            searched: vec![PathBuf::from("data")],
        };
        let envelope = err.envelope();
        assert_eq!(envelope["error"], "No data files found");
        assert_eq!(envelope["available_paths"], json!(["data"]));
        assert_eq!(envelope["fallback"], "Using default data");
    }

    #[test]
    fn test_parse_envelope_carries_details() {
        let err = ResourceError::parse("information.json", "EOF while parsing an object");
        assert!(!err.is_missing());
        assert_eq!(
            err.envelope()["error"],
            "Error loading information.json: EOF while parsing an object"
        );
        assert_eq!(err.envelope()["details"], "EOF while parsing an object");
    }
}
