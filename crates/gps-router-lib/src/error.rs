use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the GPS router library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a label could not be found in the graph.
    #[error("unknown node: {label}{}", format_suggestions(.suggestions))]
    UnknownNode {
        label: String,
        suggestions: Vec<String>,
    },

    /// Raised when both endpoints exist but no directed path connects them.
    #[error("no path exists between {start} and {goal}")]
    NoPathExists { start: String, goal: String },

    /// Raised when a graph violates a construction-time invariant.
    #[error("invalid graph: {message}")]
    InvalidGraph { message: String },

    /// Raised when a computed route plan lacks any nodes.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Node file could not be located at the resolved path.
    #[error("node file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the node file")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::UnknownNode`] without suggestions.
    pub fn unknown_node(label: impl Into<String>) -> Self {
        Error::UnknownNode {
            label: label.into(),
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn no_path(start: &str, goal: &str) -> Self {
        Error::NoPathExists {
            start: start.to_string(),
            goal: goal.to_string(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
