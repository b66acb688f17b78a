//! Small shared helpers.

pub mod canvas_input;
