//! Per-directory command tables.
//!
//! Every command line the shell understands is a literal string. For each
//! directory the accepted lines are generated from the tree, in priority
//! order: `cat` forms, `ll`, `cd ..`, `cd <child>`, then `cd <file>`.
//! Lookup returns the first exact match.

use crate::core::filesystem::{DirectoryNode, DirectoryTree};

/// What a recognised line does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Print the file stored at this content path.
    Cat { path: String },
    /// Print the directory listing.
    List,
    /// Switch to another directory.
    ChangeDir(&'static str),
    /// `cd` aimed at a file.
    NotADirectory(&'static str),
}

/// Ordered `(line, action)` pairs for one directory.
#[derive(Clone, Debug)]
pub struct CommandTable {
    routes: Vec<(String, Action)>,
}

impl CommandTable {
    /// Build the table for `node`.
    pub fn for_directory(tree: &DirectoryTree, node: &DirectoryNode) -> Self {
        let mut routes = Vec::new();

        for file in node.files() {
            routes.push((
                format!("cat {}", file),
                Action::Cat {
                    path: tree.content_path(node, file),
                },
            ));
        }

        routes.push(("ll".to_string(), Action::List));
        routes.push(("cd ..".to_string(), Action::ChangeDir(node.parent)));

        for child in node.subdirectories() {
            routes.push((format!("cd {}", child), Action::ChangeDir(child)));
            routes.push((format!("cd {}/", child), Action::ChangeDir(child)));
        }

        for file in node.files() {
            routes.push((format!("cd {}", file), Action::NotADirectory(file)));
        }

        Self { routes }
    }

    /// First action whose line equals `line` exactly.
    pub fn lookup(&self, line: &str) -> Option<&Action> {
        self.routes
            .iter()
            .find(|(l, _)| l == line)
            .map(|(_, action)| action)
    }

    /// Accepted lines in priority order.
    #[cfg(test)]
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(l, _)| l.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::directory_tree;

    fn table(dir: &str) -> CommandTable {
        let tree = directory_tree();
        CommandTable::for_directory(&tree, tree.node(dir).unwrap())
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            table("~").lines().collect::<Vec<_>>(),
            [
                "cat welcome.txt",
                "ll",
                "cd ..",
                "cd about",
                "cd about/",
                "cd blog",
                "cd blog/",
                "cd projects",
                "cd projects/",
                "cd welcome.txt",
            ]
        );
    }

    #[test]
    fn test_lookup() {
        let about = table("about");
        assert_eq!(
            about.lookup("cat cv.txt"),
            Some(&Action::Cat {
                path: "/outputs/about/cv.txt".to_string()
            })
        );
        assert_eq!(about.lookup("cd .."), Some(&Action::ChangeDir("~")));
        assert_eq!(
            about.lookup("cd contact.txt"),
            Some(&Action::NotADirectory("contact.txt"))
        );
        assert_eq!(about.lookup("cat welcome.txt"), None);
        assert_eq!(about.lookup("ll "), None);
    }

    #[test]
    fn test_blog_has_no_cat() {
        assert!(table("blog").lines().all(|l| !l.starts_with("cat ")));
        assert_eq!(
            table("blog").lookup("cd HowDoesCdWork/"),
            Some(&Action::ChangeDir("HowDoesCdWork"))
        );
    }
}
