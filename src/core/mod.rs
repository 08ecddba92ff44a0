//! Core shell logic, independent of the browser.
//!
//! This module provides:
//! - [`DirectoryTree`] and [`NavigationState`] for the virtual filesystem
//! - [`execute_command`] for running a typed line
//! - [`complete`] for tab completion
//! - [`ContentCache`] and [`ContentLoader`] for memoized file loading

mod autocomplete;
mod commands;
pub(crate) mod content;
pub mod error;
mod filesystem;

pub use autocomplete::{complete, CompletionOutcome};
pub use commands::{execute_command, CommandResult};
pub use content::{ContentCache, ContentLoader};
pub use filesystem::{DirectoryNode, DirectoryTree, Entry, NavigationState};
