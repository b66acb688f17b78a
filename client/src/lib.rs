//! # client
//!
//! Leptos + WASM frontend for the sketch-to-markup app: draw a webpage layout
//! on a canvas, submit it as a JPEG to the generation service, and review the
//! HTML it sends back.
//!
//! This crate contains the page shell, components, application state, and the
//! REST helper for the generation endpoint. It integrates with the
//! `sketchpad` crate for raster drawing via the `CanvasHost` bridge
//! component.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
