//! Command execution result type.

/// Result of executing a command line.
///
/// Commands produce at most one block of output and optionally move the
/// shell to another directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Text to display; empty means no output.
    pub output: String,
    /// Whether `output` is markup rather than literal text.
    pub markup: bool,
    /// Directory to switch to (e.g., for `cd`).
    pub navigate_to: Option<&'static str>,
}

impl CommandResult {
    /// Create a result with literal text output.
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            markup: false,
            navigate_to: None,
        }
    }

    /// Create a result that moves to `dir` without output.
    pub fn navigate(dir: &'static str) -> Self {
        Self {
            output: String::new(),
            markup: false,
            navigate_to: Some(dir),
        }
    }

    /// Create an empty result (no output, no navigation).
    pub fn empty() -> Self {
        Self::text(String::new())
    }
}
