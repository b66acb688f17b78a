//! Derived output state: generated markup and the local preview image.
//!
//! DESIGN
//! ======
//! The two strings are independent by contract — submitting never touches the
//! preview and previewing never touches the markup. Overlapping submissions
//! are serialized by a monotonic sequence gate rather than last-arrival-wins:
//! each submission takes a sequence number, and a response only lands if no
//! later response has landed already. Stale responses are dropped by the
//! caller (and logged there).

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

/// Markup and preview output derived from the sketch.
#[derive(Clone, Debug, Default)]
pub struct OutputState {
    /// HTML returned by the generation service, verbatim. Untrusted — only
    /// ever rendered inside a sandboxed frame.
    pub generated_html: String,
    /// PNG data URI of the last captured preview, or empty.
    pub preview_src: String,
    submit_seq: u64,
    applied_seq: u64,
}

impl OutputState {
    /// Allocate a sequence number for a new submission.
    pub fn next_submit_seq(&mut self) -> u64 {
        self.submit_seq += 1;
        self.submit_seq
    }

    /// Land a generation response, unless a newer one already landed.
    ///
    /// Returns `false` when the response is stale and was dropped.
    pub fn apply_generated(&mut self, seq: u64, html: String) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.generated_html = html;
        true
    }

    /// Replace the preview image wholesale. Markup is untouched.
    pub fn set_preview(&mut self, data_uri: String) {
        self.preview_src = data_uri;
    }

    /// Empty both derived strings. Idempotent; sequence numbers are kept so
    /// an in-flight submission still resolves under the same gate.
    pub fn clear(&mut self) {
        self.generated_html.clear();
        self.preview_src.clear();
    }

    /// Whether there is markup to show.
    #[must_use]
    pub fn has_markup(&self) -> bool {
        !self.generated_html.is_empty()
    }

    /// Whether there is a preview to show.
    #[must_use]
    pub fn has_preview(&self) -> bool {
        !self.preview_src.is_empty()
    }
}
