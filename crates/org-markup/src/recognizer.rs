//! The recognition boundary between text runs and inline markup.

use crate::span::{EmphasisSpan, LinkSpan};

/// Locates emphasis and link spans inside a run of text.
///
/// Implementations return matches ordered by start offset and
/// non-overlapping, so consumers can rewrite a run in a single
/// left-to-right pass. A span the implementation cannot parse (for example
/// an unterminated marker) is simply not reported and the surrounding text
/// passes through untouched.
pub trait SpanRecognizer {
    /// Emphasis spans in `text`, ordered and non-overlapping.
    fn emphasis_spans(&self, text: &str) -> Vec<EmphasisSpan>;

    /// Link spans in `text`, ordered and non-overlapping.
    fn link_spans(&self, text: &str) -> Vec<LinkSpan>;
}
