//! Root application component and shared context wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::canvas_host::CanvasHost;
use crate::components::markup_panel::MarkupPanel;
use crate::components::preview_panel::PreviewPanel;
use crate::components::toolbar::Toolbar;
use crate::state::output::OutputState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared state contexts: `UiState` carries toolbar action
/// sequence counters consumed by `CanvasHost` (which owns the engine), and
/// `OutputState` carries the derived markup/preview strings.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let output = RwSignal::new(OutputState::default());

    provide_context(ui);
    provide_context(output);

    view! {
        <Title text="Draw Your Webpage"/>

        <main class="app">
            <h1>"Draw Your Webpage"</h1>
            <CanvasHost/>
            <Toolbar/>
            <MarkupPanel/>
            <PreviewPanel/>
        </main>
    }
}
