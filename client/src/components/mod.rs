//! UI components for the single-page sketch workspace.

pub mod canvas_host;
pub mod markup_panel;
pub mod preview_panel;
pub mod toolbar;
