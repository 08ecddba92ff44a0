use crate::models::{OutputLine, OutputLineData};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::Text(text) => view! {
            <div class=css::line>{text}</div>
        }
        .into_any(),
        // Already sanitized when the line was built
        OutputLineData::Markup(html) => view! {
            <div class=css::line inner_html=html></div>
        }
        .into_any(),
    }
}
