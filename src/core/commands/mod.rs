//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` for the directory-independent forms of an input line
//! - `CommandTable` for the literal commands each directory accepts
//! - `CommandResult` for command execution results
//! - `execute_command` for running a line against the shell state
//!
//! # Architecture
//!
//! A raw line is trimmed and classified by `Command::parse`. The `cd`
//! shortcuts that behave the same everywhere are answered directly; any
//! other line is matched against the current directory's `CommandTable`.
//! Navigation is returned in the result, never applied here.

mod execute;
mod result;
mod table;

pub use execute::execute_command;
pub use result::CommandResult;
pub use table::{Action, CommandTable};

/// Directory-independent classification of an input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Nothing but whitespace.
    Empty,
    /// `cd` or `cd ~`.
    CdHome,
    /// `cd .`
    CdStay,
    /// Anything else, trimmed.
    Line(&'a str),
}

impl<'a> Command<'a> {
    /// Trim `raw` and classify it.
    pub fn parse(raw: &'a str) -> Self {
        match raw.trim() {
            "" => Self::Empty,
            "cd" | "cd ~" => Self::CdHome,
            "cd ." => Self::CdStay,
            line => Self::Line(line),
        }
    }
}
