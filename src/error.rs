//! Error types for the caption editor.
//!
//! Timestamp parsing is the only fallible operation inside the timeline core;
//! everything else on the timeline clamps. Project persistence is the other
//! place where errors surface, and only at the app boundary.

use std::io;
use thiserror::Error;

/// Errors raised while parsing a caption timestamp.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimestampError {
    /// The text does not match `HH:MM:SS.D`.
    #[error("Invalid timestamp '{input}': {reason}")]
    Invalid {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl TimestampError {
    /// Create an invalid timestamp error.
    pub fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while saving or loading a caption project.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The project file is not valid JSON for a caption project.
    #[error("Project file error: {0}")]
    Json(#[from] serde_json::Error),

    /// Save was requested before the project was given a path.
    #[error("Project path not set")]
    MissingPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimestampError::invalid("1:2:3", "expected HH:MM:SS.D");
        assert_eq!(
            err.to_string(),
            "Invalid timestamp '1:2:3': expected HH:MM:SS.D"
        );

        let err = ProjectError::MissingPath;
        assert_eq!(err.to_string(), "Project path not set");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ProjectError = json_err.into();
        assert!(matches!(err, ProjectError::Json(_)));
    }
}
