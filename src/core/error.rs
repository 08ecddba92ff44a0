//! Error types for the shell core.
//!
//! - [`FetchError`] - Network/fetch errors raised while loading file content
//! - [`TreeError`] - Inconsistencies in the configured directory tree
//!
//! Neither reaches the user as-is: fetch failures are folded into a fallback
//! text by the content cache, and tree errors are caught at startup.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Structural problems in a directory tree declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The root marker has no node.
    #[error("root directory `{0}` is not declared")]
    MissingRoot(&'static str),
    /// An entry names a subdirectory that has no node.
    #[error("`{parent}` lists `{child}/` but no such directory is declared")]
    DanglingEntry {
        parent: &'static str,
        child: &'static str,
    },
    /// A `cd ..` target has no node.
    #[error("`{dir}` has parent `{parent}` which is not declared")]
    DanglingParent {
        dir: &'static str,
        parent: &'static str,
    },
    /// Two nodes share a name.
    #[error("directory `{0}` is declared twice")]
    Duplicate(&'static str),
    /// A directory is reachable from itself through subdirectory entries.
    #[error("directory `{0}` contains itself")]
    Cycle(&'static str),
}
