//! Span types produced by markup recognition.

use std::ops::Range;

/// An emphasis span located in a text run.
///
/// `range` covers the full marked region including both marker characters,
/// so a consumer can splice a replacement over it in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmphasisSpan {
    /// Byte range of the span within the recognized text.
    pub range: Range<usize>,
    /// Marker character delimiting the span (e.g. `*`).
    pub marker: char,
    /// Text between the markers.
    pub inner: String,
}

/// A link span located in a text run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkSpan {
    /// Byte range of the span within the recognized text.
    pub range: Range<usize>,
    /// Link target (URL or internal reference).
    pub target: String,
    /// Display text; consumers fall back to the target when absent.
    pub text: Option<String>,
}
