//! Pen state machine and the canvas-bound engine.
//!
//! `SketchCore` holds everything that does not depend on a browser canvas
//! element (the raster and the pen state machine) so drawing behavior can be
//! tested natively. `Engine` wraps a core together with the DOM canvas it
//! paints onto.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::consts::{INK, PAPER, STROKE_WIDTH, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::export::{self, ExportError};
use crate::raster::Raster;
use crate::stroke::{self, Point};

/// Whether a stroke is currently being drawn.
///
/// `Down` carries the current path position: the tail end of the last drawn
/// segment, which the next [`SketchCore::extend_stroke`] continues from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PenState {
    /// No stroke in progress; extend events are ignored.
    #[default]
    Up,
    /// A stroke is in progress.
    Down {
        /// Current path position.
        last: Point,
    },
}

/// Core sketch state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Clone)]
pub struct SketchCore {
    raster: Raster,
    pen: PenState,
}

impl Default for SketchCore {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchCore {
    /// A fresh all-white surface with the pen up.
    #[must_use]
    pub fn new() -> Self {
        Self {
            raster: Raster::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            pen: PenState::Up,
        }
    }

    // --- Drawing ---

    /// Start a new path at `at`. Nothing is inked until the stroke extends.
    pub fn begin_stroke(&mut self, at: Point) {
        self.pen = PenState::Down { last: at };
    }

    /// Continue the current stroke to `to`.
    ///
    /// Ignored when the pen is up, so stray pointer-move events before a
    /// pointer-down leave the raster untouched.
    pub fn extend_stroke(&mut self, to: Point) {
        let PenState::Down { last } = self.pen else {
            return;
        };
        stroke::segment(&mut self.raster, last, to, STROKE_WIDTH, INK);
        self.pen = PenState::Down { last: to };
    }

    /// Lift the pen. Idempotent.
    pub fn end_stroke(&mut self) {
        self.pen = PenState::Up;
    }

    /// Wipe the surface back to all-white. Idempotent.
    pub fn clear(&mut self) {
        self.raster.fill(PAPER);
    }

    // --- Queries ---

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn pen_is_down(&self) -> bool {
        matches!(self.pen, PenState::Down { .. })
    }

    /// The backing raster.
    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    // --- Exports ---

    /// JPEG-encode the surface for upload.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the encoder cannot produce bytes; the
    /// caller must report this rather than uploading an empty body.
    pub fn export_jpeg(&self) -> Result<Vec<u8>, ExportError> {
        export::jpeg_bytes(&self.raster)
    }

    /// Losslessly encode the surface as a `data:image/png;base64,` URI for
    /// local preview. Never transmitted.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when PNG encoding fails.
    pub fn export_png_data_uri(&self) -> Result<String, ExportError> {
        export::png_data_uri(&self.raster)
    }
}

/// The full sketch engine. Wraps [`SketchCore`] with the browser canvas it
/// displays on.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: SketchCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: SketchCore::new() }
    }

    // --- Delegated drawing ---

    pub fn begin_stroke(&mut self, at: Point) {
        self.core.begin_stroke(at);
    }

    pub fn extend_stroke(&mut self, to: Point) {
        self.core.extend_stroke(to);
    }

    pub fn end_stroke(&mut self) {
        self.core.end_stroke();
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // --- Render ---

    /// Blit the raster onto the canvas element.
    ///
    /// The raster is the source of truth; the canvas is purely a display
    /// target, so what the user sees is always exactly what exports encode.
    ///
    /// # Errors
    ///
    /// Returns the underlying DOM error when the 2d context is unavailable or
    /// rejects the image data.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;

        let raster = self.core.raster();
        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(raster.as_rgba()),
            raster.width(),
            raster.height(),
        )?;
        ctx.put_image_data(&data, 0.0, 0.0)
    }
}
