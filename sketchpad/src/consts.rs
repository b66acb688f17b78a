//! Shared constants for the sketch surface.

use crate::raster::Pixel;

// ── Surface ─────────────────────────────────────────────────────

/// Drawing surface width in logical pixels.
pub const SURFACE_WIDTH: u32 = 500;

/// Drawing surface height in logical pixels.
pub const SURFACE_HEIGHT: u32 = 500;

// ── Pen ─────────────────────────────────────────────────────────

/// Pen diameter in pixels.
pub const STROKE_WIDTH: f64 = 2.0;

/// Stroke color — opaque black.
pub const INK: Pixel = [0, 0, 0, 255];

/// Background color — opaque white.
pub const PAPER: Pixel = [255, 255, 255, 255];

// ── Export ──────────────────────────────────────────────────────

/// JPEG quality for the upload export. Lossy is acceptable; the generation
/// service only needs to recognize layout, not pixel-exact strokes.
pub const JPEG_QUALITY: u8 = 80;
