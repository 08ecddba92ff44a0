//! File content loading with per-session memoization.
//!
//! The shell never fetches the same path twice: the first result (including
//! the fallback text for a failed load) is kept for the rest of the session.
//! There is no eviction because the set of paths is fixed by the directory
//! tree.

use std::collections::HashMap;

use crate::core::error::FetchError;
use crate::utils::dom;

/// Source of file text, usually the network.
pub trait ContentLoader {
    async fn load(&self, path: &str) -> Result<String, FetchError>;
}

/// Text shown in place of a file that could not be loaded.
pub fn load_failure_text(path: &str) -> String {
    format!("failed to load: {}", path)
}

/// Memoized file contents keyed by content path.
#[derive(Clone, Debug, Default)]
pub struct ContentCache {
    entries: HashMap<String, String>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Store `text` unless `path` already has a value; returns the kept value.
    pub fn insert_if_absent(&mut self, path: &str, text: String) -> &str {
        self.entries.entry(path.to_string()).or_insert(text)
    }

    /// Return the content of `path`, loading it on first use.
    ///
    /// Load errors are logged and replaced with [`load_failure_text`], which
    /// is cached like any other content.
    pub async fn resolve<L: ContentLoader>(&mut self, loader: &L, path: &str) -> String {
        if let Some(text) = self.get(path) {
            return text.to_string();
        }

        let text = match loader.load(path).await {
            Ok(text) => text.replace("\r\n", "\n"),
            Err(e) => {
                dom::warn(&format!("failed to load {}: {}", path, e));
                load_failure_text(path)
            }
        };

        self.insert_if_absent(path, text).to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
