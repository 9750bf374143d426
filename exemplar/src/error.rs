//! Error types for exemplar

use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;

/// Exemplar error type
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Category name not recognized
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// No example matched the requested name in the category
    #[error("Example not found in {category}: {name}")]
    ExampleNotFound { category: Category, name: String },

    /// Standard document identifier not recognized or file absent
    #[error("Standard not found: {0}")]
    StandardNotFound(String),

    /// A category's configured directory does not exist
    #[error("Category directory missing: {0}")]
    DirectoryMissing(PathBuf),

    /// A matched file could not be read after being located
    #[error("Failed to read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for exemplar operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ExampleNotFound {
            category: Category::Hooks,
            name: "useThing".to_string(),
        };
        assert_eq!(err.to_string(), "Example not found in hooks: useThing");
    }

    #[test]
    fn test_standard_not_found_display() {
        let err = Error::StandardNotFound("project_structure".to_string());
        assert_eq!(err.to_string(), "Standard not found: project_structure");
    }
}
