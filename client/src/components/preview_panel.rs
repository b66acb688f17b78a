//! Canvas preview panel.

use leptos::prelude::*;

use crate::state::output::OutputState;

/// Conditionally rendered panel showing the last captured preview image.
///
/// The image source is a local PNG data URI; nothing here touches the
/// network or the generated markup.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let output = expect_context::<RwSignal<OutputState>>();

    view! {
        {move || {
            let state = output.get();
            state.has_preview().then(|| {
                view! {
                    <section class="preview-panel">
                        <h3>"Canvas Preview"</h3>
                        <img class="preview-panel__image" src=state.preview_src alt="Canvas preview"/>
                    </section>
                }
            })
        }}
    }
}
