//! Bridge component between Leptos state and the imperative `sketchpad::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the raster truth; this host maps pointer events into
//! engine strokes, re-blits the canvas after each mutating event, and watches
//! the toolbar's action counters to run generate/clear/preview — all actions
//! that need the engine end up here because only this component holds it.
//!
//! Submissions are fire-and-forget: the export happens synchronously, then
//! the upload runs in a spawned task so the surface stays interactive. There
//! is no cancellation; overlapping responses are serialized by the
//! `OutputState` sequence gate and stale ones are dropped with a warning.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use sketchpad::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use sketchpad::engine::Engine;

use crate::net::api;
use crate::state::output::OutputState;
use crate::state::ui::UiState;
use crate::util::canvas_input::{is_primary_button, pointer_point};

fn render_or_log(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::error!("canvas render failed: {err:?}");
    }
}

/// The 500×500 drawing surface.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let output = expect_context::<RwSignal<OutputState>>();

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine: Rc<RefCell<Option<Engine>>> = Rc::new(RefCell::new(None));

    // Mount: bind the engine to the canvas element and paint the blank sheet.
    let engine_for_mount = Rc::clone(&engine);
    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let mut slot = engine_for_mount.borrow_mut();
        if slot.is_none() {
            let eng = Engine::new(canvas);
            render_or_log(&eng);
            *slot = Some(eng);
        }
    });

    // --- Pointer gestures ---

    let engine_for_down = Rc::clone(&engine);
    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if !is_primary_button(&ev) {
            return;
        }
        if let Some(eng) = engine_for_down.borrow_mut().as_mut() {
            eng.begin_stroke(pointer_point(&ev));
        }
    };

    let engine_for_move = Rc::clone(&engine);
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if let Some(eng) = engine_for_move.borrow_mut().as_mut() {
            // The engine ignores moves while the pen is up.
            eng.extend_stroke(pointer_point(&ev));
            if eng.core.pen_is_down() {
                render_or_log(eng);
            }
        }
    };

    let engine_for_up = Rc::clone(&engine);
    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        if let Some(eng) = engine_for_up.borrow_mut().as_mut() {
            eng.end_stroke();
        }
    };

    // Leaving the surface mid-drag ends the stroke rather than rubber-banding
    // back in from the edge.
    let engine_for_leave = Rc::clone(&engine);
    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| {
        if let Some(eng) = engine_for_leave.borrow_mut().as_mut() {
            eng.end_stroke();
        }
    };

    // --- Toolbar actions ---

    // Generate: export a JPEG, then upload it without blocking the UI.
    let engine_for_generate = Rc::clone(&engine);
    let last_generate = StoredValue::new(0u64);
    Effect::new(move || {
        let seq = ui.get().generate_seq;
        if seq == 0 || seq == last_generate.get_value() {
            return;
        }
        last_generate.set_value(seq);

        let jpeg = match engine_for_generate.borrow().as_ref().map(|eng| eng.core.export_jpeg()) {
            Some(Ok(bytes)) => bytes,
            Some(Err(err)) => {
                log::error!("sketch export failed, submission aborted: {err}");
                return;
            }
            None => return,
        };

        let mut submit_seq = 0;
        output.update(|out| submit_seq = out.next_submit_seq());

        leptos::task::spawn_local(async move {
            match api::generate_html(jpeg).await {
                Ok(html) => output.update(|out| {
                    if !out.apply_generated(submit_seq, html) {
                        log::warn!("dropped stale generation response (submission {submit_seq})");
                    }
                }),
                Err(err) => log::error!("generate-html failed: {err}"),
            }
        });
    });

    // Clear: blank the surface and both derived outputs.
    let engine_for_clear = Rc::clone(&engine);
    let last_clear = StoredValue::new(0u64);
    Effect::new(move || {
        let seq = ui.get().clear_seq;
        if seq == 0 || seq == last_clear.get_value() {
            return;
        }
        last_clear.set_value(seq);

        if let Some(eng) = engine_for_clear.borrow_mut().as_mut() {
            eng.clear();
            render_or_log(eng);
        }
        output.update(OutputState::clear);
    });

    // Preview: capture a local PNG data URI; never touches the markup.
    let engine_for_preview = Rc::clone(&engine);
    let last_preview = StoredValue::new(0u64);
    Effect::new(move || {
        let seq = ui.get().preview_seq;
        if seq == 0 || seq == last_preview.get_value() {
            return;
        }
        last_preview.set_value(seq);

        match engine_for_preview.borrow().as_ref().map(|eng| eng.core.export_png_data_uri()) {
            Some(Ok(uri)) => output.update(|out| out.set_preview(uri)),
            Some(Err(err)) => log::error!("preview capture failed: {err}"),
            None => {}
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="sketch-canvas"
            width=SURFACE_WIDTH.to_string()
            height=SURFACE_HEIGHT.to_string()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
