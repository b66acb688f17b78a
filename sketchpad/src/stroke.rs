//! Round-pen rasterization: point stamps and line segments.
//!
//! Segments are drawn by stamping a round pen along the line at sub-pixel
//! steps. A pixel is inked when its center falls inside the pen circle, so a
//! 2-px pen leaves a 2×2 block at integer coordinates. All writes clip at the
//! raster bounds.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use crate::raster::{Pixel, Raster};

/// A position on the drawing surface, in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Stamp the pen once at `center`.
#[allow(clippy::cast_possible_truncation)]
pub fn stamp(raster: &mut Raster, center: Point, diameter: f64, color: Pixel) {
    let radius = diameter / 2.0;
    let min_x = (center.x - radius).floor() as i64;
    let max_x = (center.x + radius).ceil() as i64;
    let min_y = (center.y - radius).floor() as i64;
    let max_y = (center.y + radius).ceil() as i64;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = (x as f64 + 0.5) - center.x;
            let dy = (y as f64 + 0.5) - center.y;
            if dx * dx + dy * dy <= radius * radius {
                raster.set(x, y, color);
            }
        }
    }
}

/// Draw a segment from `from` to `to`, endpoints included.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn segment(raster: &mut Raster, from: Point, to: Point, diameter: f64, color: Pixel) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let span = dx.abs().max(dy.abs());
    // Two stamps per pixel of travel keeps the line gap-free at any slope.
    let steps = ((span * 2.0).ceil() as u32).max(1);

    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let at = Point::new(from.x + dx * t, from.y + dy * t);
        stamp(raster, at, diameter, color);
    }
}
