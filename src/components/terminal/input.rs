//! Terminal input line with a block cursor.
//!
//! A real `<input>` sits transparently over the rendered line so that both
//! physical and on-screen keyboards can type into it. Text is only ever
//! appended or erased at the end, so the caret is kept there.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Keys that would move the caret away from the end of the line.
fn moves_caret(key: &str) -> bool {
    matches!(
        key,
        "ArrowLeft" | "ArrowRight" | "ArrowUp" | "ArrowDown" | "Home" | "End"
    )
}

/// Caret offset of the end of `value`, in the UTF-16 units the selection
/// API counts.
fn caret_end(value: &str) -> u32 {
    value.encode_utf16().count() as u32
}

/// The prompt and typed text are hidden while a command runs; the element
/// itself stays focusable.
fn line_class(pending: bool) -> String {
    if pending {
        format!("{} {}", css::line, css::pending)
    } else {
        css::line.to_string()
    }
}

/// Prompt line accepting a command.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    /// Set while the previous command is still resolving.
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<String>,
    on_autocomplete: Callback<String, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let end = caret_end(&input.value());
            let _ = input.set_selection_range(end, end);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            if pending.get_untracked() {
                return;
            }
            if let Some(completed) = on_autocomplete.run(input_value.get_untracked()) {
                set_input_value.set(completed);
                move_cursor_to_end();
            }
        }
        "Enter" => {
            ev.prevent_default();
            if pending.get_untracked() {
                return;
            }
            let value = input_value.get_untracked();
            set_input_value.set(String::new());
            on_submit.run(value);
        }
        key if moves_caret(key) => {
            ev.prevent_default();
            move_cursor_to_end();
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    // A tap can drop the caret mid-line
    let handle_click = move |_| move_cursor_to_end();

    view! {
        <div class=move || line_class(pending.get())>
            <span class=css::prompt>{prompt}</span>
            <div class=css::field>
                <span class=css::typed>{move || input_value.get()}</span>
                <span class=css::cursor>"\u{2588}"</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    aria-label="Terminal input"
                    autocomplete="off"
                    autocapitalize="none"
                    spellcheck="false"
                    prop:value=input_value
                    on:input=handle_input
                    on:keydown=handle_keydown
                    on:click=handle_click
                />
            </div>
        </div>
    }
}
