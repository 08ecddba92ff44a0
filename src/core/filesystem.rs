//! Static virtual filesystem.
//!
//! The tree is declared once in [`crate::config::directory_tree`] and never
//! changes while the page is open. Directories are addressed by their bare
//! name (`"about"`, not `"~/about"`), which is also what the prompt shows.

use std::fmt;

use crate::core::error::TreeError;

// ============================================================================
// Entries
// ============================================================================

/// A single item inside a directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Directory(&'static str),
    File(&'static str),
}

impl Entry {
    /// Bare name without any suffix.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directory(name) | Self::File(name) => *name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

/// Shell display form: directories get a trailing slash.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(name) => write!(f, "{}/", name),
            Self::File(name) => write!(f, "{}", name),
        }
    }
}

// ============================================================================
// Directory Nodes
// ============================================================================

/// A directory and everything the shell knows about it.
#[derive(Clone, Copy, Debug)]
pub struct DirectoryNode {
    /// Name shown in the prompt and used for `cd`.
    pub name: &'static str,
    /// Where `cd ..` leads.
    pub parent: &'static str,
    /// Location of this directory's files below the content root
    /// (empty for the root).
    pub path: &'static str,
    /// Entries in declared order.
    pub entries: &'static [Entry],
    /// Pre-rendered output of `ll`.
    pub listing: &'static str,
}

impl DirectoryNode {
    pub fn subdirectories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(|e| e.is_dir())
            .map(Entry::name)
    }

    pub fn files(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(|e| !e.is_dir())
            .map(Entry::name)
    }
}

// ============================================================================
// Directory Tree
// ============================================================================

/// Read-only directory tree.
///
/// # Path Convention
///
/// - Root marker: `"~"`
/// - Content root: a URL path prefix such as `"/outputs"`
/// - File content path: `{content_root}/{node.path}/{file}`, with the node
///   segment omitted for the root
#[derive(Clone, Copy, Debug)]
pub struct DirectoryTree {
    root: &'static str,
    content_root: &'static str,
    nodes: &'static [DirectoryNode],
}

impl DirectoryTree {
    pub const fn new(
        root: &'static str,
        content_root: &'static str,
        nodes: &'static [DirectoryNode],
    ) -> Self {
        Self {
            root,
            content_root,
            nodes,
        }
    }

    /// Name of the root directory (the home marker).
    pub fn root(&self) -> &'static str {
        self.root
    }

    /// Look up a directory by name.
    pub fn node(&self, name: &str) -> Option<&'static DirectoryNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Entries of a directory, empty for an unknown name.
    pub fn entries_of(&self, name: &str) -> &'static [Entry] {
        self.node(name).map(|n| n.entries).unwrap_or(&[])
    }

    /// URL path of `file` inside `dir`.
    pub fn content_path(&self, dir: &DirectoryNode, file: &str) -> String {
        if dir.path.is_empty() {
            format!("{}/{}", self.content_root, file)
        } else {
            format!("{}/{}/{}", self.content_root, dir.path, file)
        }
    }

    /// Check that every referenced directory is declared exactly once and
    /// that no directory contains itself.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.node(self.root).is_none() {
            return Err(TreeError::MissingRoot(self.root));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            if self.nodes[..i].iter().any(|n| n.name == node.name) {
                return Err(TreeError::Duplicate(node.name));
            }
            if self.node(node.parent).is_none() {
                return Err(TreeError::DanglingParent {
                    dir: node.name,
                    parent: node.parent,
                });
            }
            if let Some(child) = node.subdirectories().find(|c| self.node(c).is_none()) {
                return Err(TreeError::DanglingEntry {
                    parent: node.name,
                    child,
                });
            }
        }

        for node in self.nodes {
            self.check_acyclic(node.name, &mut Vec::new())?;
        }

        Ok(())
    }

    /// Depth-first walk of the subdirectories below `dir`; `path` holds the
    /// directories currently being walked.
    fn check_acyclic(
        &self,
        dir: &'static str,
        path: &mut Vec<&'static str>,
    ) -> Result<(), TreeError> {
        if path.contains(&dir) {
            return Err(TreeError::Cycle(dir));
        }
        let Some(node) = self.node(dir) else {
            return Ok(());
        };

        path.push(dir);
        for child in node.subdirectories() {
            self.check_acyclic(child, path)?;
        }
        path.pop();

        Ok(())
    }
}

// ============================================================================
// Navigation State
// ============================================================================

/// The shell's current working directory.
///
/// Only ever replaced as a whole by a successful `cd`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    cwd: &'static str,
}

impl NavigationState {
    /// Start at the root of `tree`.
    pub fn new(tree: &DirectoryTree) -> Self {
        Self { cwd: tree.root() }
    }

    pub fn at(cwd: &'static str) -> Self {
        Self { cwd }
    }

    pub fn cwd(&self) -> &'static str {
        self.cwd
    }
}

// ============================================================================
// Tests
// ============================================================================
