//! Root application module.
//!
//! Contains the main App component, AppContext definition, TerminalState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::terminal::Terminal;
use crate::config::{directory_tree, MOTD, PROMPT_USER};
use crate::core::{
    complete, execute_command, CommandResult, CompletionOutcome, ContentCache, ContentLoader,
    DirectoryTree, NavigationState,
};
use crate::models::OutputLine;
use crate::utils::dom;

/// Separator between candidates in a completion listing.
const CANDIDATE_SEPARATOR: &str = "  ";

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Everything printed so far, oldest first.
    pub transcript: RwSignal<Vec<OutputLine>>,
    /// Current working directory.
    pub nav: RwSignal<NavigationState>,
    /// Set while a submitted command is still resolving.
    pub busy: RwSignal<bool>,
}

impl TerminalState {
    pub fn new(tree: &DirectoryTree) -> Self {
        Self {
            transcript: RwSignal::new(Vec::new()),
            nav: RwSignal::new(NavigationState::new(tree)),
            busy: RwSignal::new(false),
        }
    }

    /// Appends a block of output. Empty output is dropped.
    ///
    /// Every block is rendered on its own line.
    pub fn append(&self, text: &str, markup: bool) {
        if let Some(line) = OutputLine::from_output(text, markup) {
            self.transcript.update(|t| t.push(line));
        }
    }

    /// Freeze the current prompt line together with what was typed on it.
    pub fn echo_input(&self, input: &str) {
        let line = OutputLine::command(self.prompt(), input);
        self.transcript.update(|t| t.push(line));
    }

    /// Print a command's output and apply its navigation, if any.
    pub fn apply(&self, result: CommandResult) {
        self.append(&result.output, result.markup);
        if let Some(dir) = result.navigate_to {
            self.nav.set(NavigationState::at(dir));
        }
    }

    /// Complete `input` against the current directory.
    ///
    /// Returns the new input value, if it changes. When several candidates
    /// share no longer prefix, the prompt line and the candidates are printed
    /// first and the typed line is handed back unchanged.
    pub fn complete_input(&self, tree: &DirectoryTree, input: &str) -> Option<String> {
        let cwd = self.nav.get_untracked().cwd();

        match complete(tree, cwd, input) {
            CompletionOutcome::NoOp => None,
            CompletionOutcome::SingleMatch(line) | CompletionOutcome::PrefixExpand(line) => {
                Some(line)
            }
            CompletionOutcome::ListCandidates { line, candidates } => {
                self.echo_input(input);
                self.append(&candidates.join(CANDIDATE_SEPARATOR), false);
                Some(line)
            }
        }
    }

    /// Gets the current prompt string for display.
    pub fn prompt(&self) -> String {
        self.nav.with(prompt_for)
    }
}

/// Format: `{user} {cwd} % `
pub fn prompt_for(nav: &NavigationState) -> String {
    format!("{} {} % ", PROMPT_USER, nav.cwd())
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`. It owns the single navigation state
/// and content cache of the session.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Terminal state (transcript, navigation).
    pub terminal: TerminalState,

    /// Memoized file contents.
    pub cache: StoredValue<ContentCache>,

    /// Directory tree the shell navigates.
    pub tree: DirectoryTree,
}

impl AppContext {
    pub fn new() -> Self {
        let tree = directory_tree();
        if let Err(e) = tree.validate() {
            dom::warn(&format!("directory tree is inconsistent: {}", e));
        }

        Self {
            terminal: TerminalState::new(&tree),
            cache: StoredValue::new(ContentCache::new()),
            tree,
        }
    }

    /// Start running a submitted line.
    ///
    /// The prompt line is echoed and the terminal marked busy right away. The
    /// returned future resolves the command, prints its output and clears the
    /// flag. While another command is still resolving this returns `None` and
    /// changes nothing, so outputs always appear in submission order.
    pub fn submit<L: ContentLoader + 'static>(
        self,
        input: String,
        loader: L,
    ) -> Option<impl Future<Output = ()>> {
        if self.terminal.busy.get_untracked() {
            return None;
        }

        self.terminal.echo_input(&input);
        self.terminal.busy.set(true);

        let nav = self.terminal.nav.get_untracked();
        // Moved out for the await and put back after; `busy` keeps it exclusive.
        let mut cache = self
            .cache
            .try_update_value(std::mem::take)
            .unwrap_or_default();

        Some(async move {
            let result = execute_command(&input, &nav, &self.tree, &mut cache, &loader).await;
            self.cache.set_value(cache);
            self.terminal.apply(result);
            self.terminal.busy.set(false);
        })
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, prints the greeting and
/// renders the terminal.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    ctx.terminal.append(MOTD, true);
    provide_context(ctx);

    view! { <Terminal /> }
}
