//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Directory listings are loaded at compile time using `include_str!`.

use crate::core::{DirectoryNode, DirectoryTree, Entry};

// =============================================================================
// Application Metadata
// =============================================================================

/// User and host shown in the prompt.
pub const PROMPT_USER: &str = "ian@ianjchoi.com";

/// Hint shown once when the terminal starts (markup).
pub const MOTD: &str = "Type <b>ll</b> to list files, <b>cd</b> to move around, \
<b>cat</b> to read a file. Press <b>Tab</b> to complete names.";

// =============================================================================
// Network Configuration
// =============================================================================

/// URL path under which file contents are served.
pub const CONTENT_ROOT: &str = "/outputs";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Directory Tree
// =============================================================================

/// Home directory marker.
pub const ROOT_DIR: &str = "~";

const LISTING_HOME: &str = include_str!("../assets/listings/home.txt");
const LISTING_ABOUT: &str = include_str!("../assets/listings/about.txt");
const LISTING_BLOG: &str = include_str!("../assets/listings/blog.txt");
const LISTING_PROJECTS: &str = include_str!("../assets/listings/projects.txt");
const LISTING_HOW_DOES_CD_WORK: &str = include_str!("../assets/listings/how_does_cd_work.txt");

static NODES: &[DirectoryNode] = &[
    DirectoryNode {
        name: ROOT_DIR,
        parent: ROOT_DIR,
        path: "",
        entries: &[
            Entry::Directory("about"),
            Entry::Directory("blog"),
            Entry::Directory("projects"),
            Entry::File("welcome.txt"),
        ],
        listing: LISTING_HOME,
    },
    DirectoryNode {
        name: "about",
        parent: ROOT_DIR,
        path: "about",
        entries: &[
            Entry::File("about.txt"),
            Entry::File("contact.txt"),
            Entry::File("cv.txt"),
        ],
        listing: LISTING_ABOUT,
    },
    DirectoryNode {
        name: "blog",
        parent: ROOT_DIR,
        path: "blog",
        entries: &[Entry::Directory("HowDoesCdWork")],
        listing: LISTING_BLOG,
    },
    DirectoryNode {
        name: "projects",
        parent: ROOT_DIR,
        path: "projects",
        entries: &[Entry::File("01_allocator_sim.txt")],
        listing: LISTING_PROJECTS,
    },
    // Lives under blog/ on the server, but `cd ..` goes home.
    DirectoryNode {
        name: "HowDoesCdWork",
        parent: ROOT_DIR,
        path: "blog/HowDoesCdWork",
        entries: &[Entry::File("00_ReadMe.txt"), Entry::File("01_structure.txt")],
        listing: LISTING_HOW_DOES_CD_WORK,
    },
];

/// Get the site's directory tree.
pub fn directory_tree() -> DirectoryTree {
    DirectoryTree::new(ROOT_DIR, CONTENT_ROOT, NODES)
}
