//! Error types surfaced to the host shell.

use std::fmt;

/// Errors surfaced by provider queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The path does not resolve to a cell: an unrecognized token, or a
    /// step across a closed edge.
    PathNotFound {
        /// The textual path as supplied by the host.
        path: String,
    },
    /// Recursive child enumeration was requested. The provider never
    /// enumerates recursively; this is a policy rejection, not a data
    /// error, and is reported distinctly from
    /// [`PathNotFound`](Self::PathNotFound).
    RecursionUnsupported,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound { path } => write!(f, "path does not exist: '{path}'"),
            Self::RecursionUnsupported => {
                write!(f, "recursive child enumeration is not supported")
            }
        }
    }
}

impl std::error::Error for ProviderError {}
