//! Raster sketch engine for the draw-a-webpage client.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drawing surface: a fixed-size RGBA raster that pointer gestures paint black
//! strokes onto, plus encoders that turn the raster into upload and preview
//! images. The Leptos host layer is responsible only for wiring DOM events to
//! the engine and shipping the exported JPEG to the generation service.
//!
//! Keeping the pixel truth in Rust (rather than reading pixels back out of the
//! `<canvas>` element) means the exported image is exactly what the user sees,
//! and every drawing property is testable natively without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pen state machine, testable [`engine::SketchCore`], and the canvas-bound [`engine::Engine`] |
//! | [`raster`] | Fixed-size RGBA pixel buffer |
//! | [`stroke`] | Round-pen stamping and line-segment rasterization |
//! | [`export`] | JPEG upload bytes and PNG preview data URIs |
//! | [`consts`] | Surface dimensions, pen width, ink/paper colors |

pub mod consts;
pub mod engine;
pub mod export;
pub mod raster;
pub mod stroke;
