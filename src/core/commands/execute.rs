//! Command execution logic.
//!
//! Contains the `execute_command` function that runs a typed line against
//! the directory tree and returns its result.

use crate::core::content::{ContentCache, ContentLoader};
use crate::core::filesystem::{DirectoryNode, DirectoryTree, NavigationState};

use super::{Action, Command, CommandResult, CommandTable};

/// Execute a raw input line and return its output.
///
/// Only `cat` suspends (on a first, uncached load). Errors such as unknown
/// commands or bad `cd` targets are ordinary text results.
///
/// # Arguments
///
/// * `raw` - The line as typed, untrimmed
/// * `nav` - Current working directory
/// * `tree` - Directory tree to resolve against
/// * `cache` - Session content cache, filled on first `cat` of a file
/// * `loader` - Source used for uncached file content
pub async fn execute_command<L: ContentLoader>(
    raw: &str,
    nav: &NavigationState,
    tree: &DirectoryTree,
    cache: &mut ContentCache,
    loader: &L,
) -> CommandResult {
    match Command::parse(raw) {
        Command::Empty | Command::CdStay => CommandResult::empty(),
        Command::CdHome => CommandResult::navigate(tree.root()),
        Command::Line(line) => match tree.node(nav.cwd()) {
            Some(node) => execute_in(line, node, tree, cache, loader).await,
            None => command_not_found(line),
        },
    }
}

/// Run `line` inside a known directory.
async fn execute_in<L: ContentLoader>(
    line: &str,
    node: &DirectoryNode,
    tree: &DirectoryTree,
    cache: &mut ContentCache,
    loader: &L,
) -> CommandResult {
    let table = CommandTable::for_directory(tree, node);

    match table.lookup(line) {
        Some(Action::Cat { path }) => CommandResult::text(cache.resolve(loader, path).await),
        Some(Action::List) => CommandResult::text(node.listing.trim_end()),
        Some(Action::ChangeDir(dir)) => CommandResult::navigate(*dir),
        Some(Action::NotADirectory(file)) => {
            CommandResult::text(format!("cd: not a directory: {}", file))
        }
        None => match line.strip_prefix("cd ") {
            Some(arg) => CommandResult::text(format!("cd: no such file or directory: {}", arg)),
            None => command_not_found(line),
        },
    }
}

fn command_not_found(line: &str) -> CommandResult {
    CommandResult::text(format!("command not found: {}", line))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::directory_tree;
    use crate::core::content::tests::MockLoader;

    const DIRS: &[&str] = &["~", "about", "blog", "projects", "HowDoesCdWork"];

    async fn run(cwd: &'static str, line: &str) -> CommandResult {
        let loader = MockLoader::default();
        let mut cache = ContentCache::new();
        execute_command(
            line,
            &NavigationState::at(cwd),
            &directory_tree(),
            &mut cache,
            &loader,
        )
        .await
    }

    #[tokio::test]
    async fn test_empty_input_everywhere() {
        for &dir in DIRS {
            for line in ["", "   ", "\t\n"] {
                assert_eq!(run(dir, line).await, CommandResult::empty());
            }
        }
    }

    #[tokio::test]
    async fn test_cd_home_everywhere() {
        for &dir in DIRS {
            for line in ["cd", "cd ~", "  cd  "] {
                assert_eq!(run(dir, line).await, CommandResult::navigate("~"));
            }
        }
    }

    #[tokio::test]
    async fn test_cd_dot_is_noop() {
        for &dir in DIRS {
            assert_eq!(run(dir, "cd .").await, CommandResult::empty());
        }
    }

    #[tokio::test]
    async fn test_cd_parent() {
        for &dir in DIRS {
            assert_eq!(run(dir, "cd ..").await.navigate_to, Some("~"));
        }
    }

    #[tokio::test]
    async fn test_cd_child() {
        assert_eq!(run("~", "cd about").await.navigate_to, Some("about"));
        assert_eq!(run("~", "cd blog/").await.navigate_to, Some("blog"));
        assert_eq!(run("~", " cd projects ").await.navigate_to, Some("projects"));
        assert_eq!(
            run("blog", "cd HowDoesCdWork").await.navigate_to,
            Some("HowDoesCdWork")
        );
    }

    #[tokio::test]
    async fn test_cd_into_file() {
        assert_eq!(
            run("~", "cd welcome.txt").await,
            CommandResult::text("cd: not a directory: welcome.txt")
        );
        assert_eq!(
            run("about", "cd cv.txt").await,
            CommandResult::text("cd: not a directory: cv.txt")
        );
    }

    #[tokio::test]
    async fn test_cd_unknown_target() {
        for &dir in DIRS {
            for arg in ["nowhere", "About", "blog/HowDoesCdWork", "../about", "~/"] {
                let result = run(dir, &format!("cd {}", arg)).await;
                assert!(result.output.contains(arg), "{dir}: {}", result.output);
                assert_eq!(
                    result.output,
                    format!("cd: no such file or directory: {}", arg)
                );
                assert_eq!(result.navigate_to, None);
            }
        }
    }

    #[tokio::test]
    async fn test_command_not_found() {
        for &dir in DIRS {
            assert_eq!(
                run(dir, "foobar").await,
                CommandResult::text("command not found: foobar")
            );
        }
        assert_eq!(
            run("~", "  ls -la ").await.output,
            "command not found: ls -la"
        );
        assert_eq!(run("~", "cdabout").await.output, "command not found: cdabout");
    }

    #[tokio::test]
    async fn test_cat_outside_its_directory() {
        assert_eq!(
            run("about", "cat welcome.txt").await.output,
            "command not found: cat welcome.txt"
        );
    }

    #[tokio::test]
    async fn test_ll_listing() {
        let listing = run("projects", "ll").await.output;
        assert!(listing.starts_with("total 16"));
        assert!(listing.ends_with("01_allocator_sim.txt"));

        for &dir in DIRS {
            let result = run(dir, "ll").await;
            assert!(!result.output.is_empty());
            assert!(!result.markup);
            assert_eq!(result.navigate_to, None);
        }
    }

    #[tokio::test]
    async fn test_unknown_directory_only_handles_shortcuts() {
        assert_eq!(run("tech", "ll").await.output, "command not found: ll");
        assert_eq!(
            run("tech", "cd ..").await.output,
            "command not found: cd .."
        );
        assert_eq!(run("tech", "cd").await.navigate_to, Some("~"));
    }

    #[tokio::test]
    async fn test_cat_resolves_and_memoizes() {
        let tree = directory_tree();
        let cases = [
            ("~", "welcome.txt", "/outputs/welcome.txt"),
            ("about", "about.txt", "/outputs/about/about.txt"),
            ("about", "contact.txt", "/outputs/about/contact.txt"),
            ("about", "cv.txt", "/outputs/about/cv.txt"),
            ("projects", "01_allocator_sim.txt", "/outputs/projects/01_allocator_sim.txt"),
            ("HowDoesCdWork", "00_ReadMe.txt", "/outputs/blog/HowDoesCdWork/00_ReadMe.txt"),
            ("HowDoesCdWork", "01_structure.txt", "/outputs/blog/HowDoesCdWork/01_structure.txt"),
        ];
        let files: Vec<(&str, String)> = cases
            .iter()
            .map(|(_, _, path)| (*path, format!("content of {}", path)))
            .collect();
        let loader = MockLoader::with(
            &files
                .iter()
                .map(|(p, t)| (*p, t.as_str()))
                .collect::<Vec<_>>(),
        );
        let mut cache = ContentCache::new();

        for (dir, file, path) in cases {
            let nav = NavigationState::at(dir);
            let line = format!("cat {}", file);
            let first = execute_command(&line, &nav, &tree, &mut cache, &loader).await;
            let calls = loader.call_count();
            let second = execute_command(&line, &nav, &tree, &mut cache, &loader).await;

            assert_eq!(first.output, format!("content of {}", path));
            assert_eq!(first, second);
            assert_eq!(loader.call_count(), calls);
            assert_eq!(first.navigate_to, None);
        }
        assert_eq!(loader.call_count(), cases.len());
    }

    #[tokio::test]
    async fn test_cat_failure_text() {
        let result = run("~", "cat welcome.txt").await;
        assert_eq!(result.output, "failed to load: /outputs/welcome.txt");
    }
}
