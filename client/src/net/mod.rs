//! Network layer: the generation endpoint client and its wire types.

pub mod api;
pub mod types;
