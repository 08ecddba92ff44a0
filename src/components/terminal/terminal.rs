//! Terminal view component.
//!
//! The terminal interface with output history and command input.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::models::OutputLine;
use crate::utils::{dom, HttpLoader};

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Keep the newest output in view.
fn setup_autoscroll_effect(
    transcript: RwSignal<Vec<OutputLine>>,
    container_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        transcript.track();
        if let Some(el) = container_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let container_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(ctx.terminal.transcript, container_ref);

    let prompt = Signal::derive(move || ctx.terminal.prompt());
    let on_submit = create_submit_callback(ctx);
    let on_autocomplete = create_autocomplete_callback(ctx);

    // Taps land here too, which is what opens the soft keyboard on mobile.
    let handle_click = move |_| dom::focus_terminal_input();
    let transcript = ctx.terminal.transcript;
    let busy = ctx.terminal.busy;

    view! {
        <div node_ref=container_ref class=css::container on:click=handle_click>
            <For
                each=move || transcript.get()
                key=|line| line.id
                children=|line| view! { <Output line=line /> }
            />

            // Stays mounted while a command runs so a focused soft keyboard
            // stays open.
            <Input
                prompt=prompt
                pending=busy
                on_submit=on_submit
                on_autocomplete=on_autocomplete
            />
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

/// Run a submitted line. Lines arriving while one is still running are
/// dropped.
fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        if let Some(run) = ctx.submit(input, HttpLoader) {
            wasm_bindgen_futures::spawn_local(run);
        }
    })
}

/// Complete the input; returns the new input value, if it changes.
fn create_autocomplete_callback(ctx: AppContext) -> Callback<String, Option<String>> {
    Callback::new(move |input: String| ctx.terminal.complete_input(&ctx.tree, &input))
}
