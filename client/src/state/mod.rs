//! Reactive application state shared via Leptos context.

pub mod output;
pub mod ui;
