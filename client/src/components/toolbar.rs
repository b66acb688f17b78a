//! Action toolbar: generate, clear, preview.
//!
//! Stateless by design — each button bumps a request counter in `UiState`
//! and `CanvasHost`, which owns the engine, performs the action.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// The three action buttons under the canvas.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_generate = move |_| ui.update(UiState::request_generate);
    let on_clear = move |_| ui.update(UiState::request_clear);
    let on_preview = move |_| ui.update(UiState::request_preview);

    view! {
        <div class="toolbar">
            <button class="btn" on:click=on_generate>"Generate HTML"</button>
            <button class="btn" on:click=on_clear>"Clear"</button>
            <button class="btn" on:click=on_preview>"Preview Image"</button>
        </div>
    }
}
