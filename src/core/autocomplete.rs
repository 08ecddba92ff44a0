//! Tab autocomplete for command arguments.
//!
//! Completion works on the last space-delimited token of the line and
//! matches it against the entries of the current directory:
//! - Single match: replace the token with the entry
//! - Several matches sharing a longer prefix: extend the token to it
//! - Otherwise: list the candidates and leave the line as typed
//!
//! The first word of a line is never completed.

use crate::core::filesystem::DirectoryTree;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Nothing to complete.
    NoOp,
    /// Exactly one entry matched - the completed line.
    SingleMatch(String),
    /// Matches share a prefix longer than the token - the extended line.
    PrefixExpand(String),
    /// Ambiguous matches to show; `line` is the input to restore.
    ListCandidates {
        line: String,
        candidates: Vec<String>,
    },
}

// ============================================================================
// Token Parsing
// ============================================================================

/// Input split at the token being completed.
#[derive(Debug, PartialEq)]
struct TokenContext<'a> {
    /// Everything up to and including the last space.
    base: String,
    /// Partial entry name after it.
    token: &'a str,
}

impl<'a> TokenContext<'a> {
    /// Locate the token after the last space, ignoring trailing whitespace.
    ///
    /// A lone command followed by whitespace (`"cd "`) yields an empty token.
    fn parse(input: &'a str) -> Option<Self> {
        let trimmed = input.trim_end();

        match trimmed.rfind(' ') {
            Some(idx) => Some(Self {
                base: trimmed[..=idx].to_string(),
                token: &trimmed[idx + 1..],
            }),
            None if !trimmed.is_empty() && trimmed.len() < input.len() => Some(Self {
                base: format!("{} ", trimmed),
                token: "",
            }),
            None => None,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn complete(tree: &DirectoryTree, cwd: &str, input: &str) -> CompletionOutcome {
    let Some(ctx) = TokenContext::parse(input) else {
        return CompletionOutcome::NoOp;
    };

    let matches: Vec<String> = tree
        .entries_of(cwd)
        .iter()
        .map(|entry| entry.to_string())
        .filter(|name| name.starts_with(ctx.token))
        .collect();

    match matches.len() {
        0 => CompletionOutcome::NoOp,
        1 => CompletionOutcome::SingleMatch(format!("{}{}", ctx.base, matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            if common.len() > ctx.token.len() {
                CompletionOutcome::PrefixExpand(format!("{}{}", ctx.base, common))
            } else {
                CompletionOutcome::ListCandidates {
                    line: format!("{}{}", ctx.base, ctx.token),
                    candidates: matches,
                }
            }
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the longest common prefix of multiple strings (case-sensitive).
fn find_common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in rest {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((i, a), b)| *i < prefix_len && a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0);
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================
