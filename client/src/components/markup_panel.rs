//! Generated-markup panel.
//!
//! SAFETY
//! ======
//! The markup comes back from the generation service verbatim and is
//! untrusted. It is rendered only inside a fully sandboxed `<iframe srcdoc>`
//! (no scripts, no same-origin access), never injected into the host
//! document, and the raw source is shown separately as plain text.

use leptos::prelude::*;

use crate::state::output::OutputState;

/// Conditionally rendered panel showing the last generated webpage.
#[component]
pub fn MarkupPanel() -> impl IntoView {
    let output = expect_context::<RwSignal<OutputState>>();

    view! {
        {move || {
            let state = output.get();
            state.has_markup().then(|| {
                let html = state.generated_html;
                view! {
                    <section class="markup-panel">
                        <h2>"Generated Webpage"</h2>
                        <iframe
                            class="markup-panel__frame"
                            sandbox=""
                            srcdoc=html.clone()
                            title="Generated webpage (sandboxed)"
                        ></iframe>
                        <details class="markup-panel__source">
                            <summary>"Markup source"</summary>
                            <pre>{html}</pre>
                        </details>
                    </section>
                }
            })
        }}
    }
}
