//! Toolbar action state.
//!
//! DESIGN
//! ======
//! The toolbar is stateless; it only requests actions. `CanvasHost` owns the
//! engine, so requests travel as monotonically bumped sequence counters that
//! the host watches with effects. A counter at zero means the action has
//! never been requested.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Pending-action counters bumped by the toolbar, consumed by the canvas host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Bumped when the user asks to generate HTML from the sketch.
    pub generate_seq: u64,
    /// Bumped when the user asks to clear the sketch and outputs.
    pub clear_seq: u64,
    /// Bumped when the user asks for a local preview capture.
    pub preview_seq: u64,
}

impl UiState {
    /// Request a generate action.
    pub fn request_generate(&mut self) {
        self.generate_seq += 1;
    }

    /// Request a clear action.
    pub fn request_clear(&mut self) {
        self.clear_seq += 1;
    }

    /// Request a preview capture.
    pub fn request_preview(&mut self) {
        self.preview_seq += 1;
    }
}
