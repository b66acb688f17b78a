//! Wire types for the generation service.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Response body from `POST /generate-html`.
///
/// The service may return more fields; only `html` is read, and a body
/// without it is a parse error the caller logs and discards.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateHtmlResponse {
    /// The generated markup, taken verbatim.
    pub html: String,
}
