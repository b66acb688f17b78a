//! Fixed-size RGBA pixel buffer backing the drawing surface.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::consts::PAPER;

/// One RGBA pixel.
pub type Pixel = [u8; 4];

/// A mutable RGBA8 pixel grid.
///
/// Coordinates are signed so callers can pass pointer positions straight
/// through; out-of-bounds writes are clipped rather than treated as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster filled with [`PAPER`] white.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut raster = Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        };
        raster.fill(PAPER);
        raster
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flood the entire buffer with one color.
    pub fn fill(&mut self, color: Pixel) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Write one pixel. Out-of-bounds coordinates are clipped.
    pub fn set(&mut self, x: i64, y: i64, color: Pixel) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[offset..offset + 4].copy_from_slice(&color);
    }

    /// Read one pixel, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> Option<Pixel> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(px)
    }

    /// The raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether every pixel equals `color`.
    #[must_use]
    pub fn is_uniform(&self, color: Pixel) -> bool {
        self.pixels.chunks_exact(4).all(|px| px == color)
    }
}
