//! Org syntax recognition over compiled regular expressions.

use regex::Regex;

use crate::recognizer::SpanRecognizer;
use crate::span::{EmphasisSpan, LinkSpan};

/// Markers that can delimit an emphasis span.
const EMPHASIS_MARKERS: [char; 6] = ['*', '/', '_', '=', '~', '+'];

/// Characters allowed immediately before an emphasis span.
const PRE_BORDER: &[char] = &[' ', '\t', '\n', '(', '\'', '"', '{'];

/// Characters allowed immediately after an emphasis span.
const POST_BORDER: &[char] = &[
    ' ', '\t', '\n', '-', '.', ',', ':', '!', '?', ';', '\'', ')', '"', '}',
];

/// Regex-backed recognizer for Org-style inline markup.
///
/// Emphasis spans are delimited by a single marker character on each side
/// (`*bold*`, `/italic/`, …). The span contents may not start or end with
/// whitespace or contain the marker, and the span itself must sit on a
/// word boundary: mid-word markers like `a*b*` are not emphasis. Links are
/// the bracket forms `[[target]]` and `[[target][description]]`.
///
/// The border rules double as the failure policy: anything that does not
/// match cleanly (an unterminated `*foo`, a marker glued to a word) is not
/// reported as a span at all.
pub struct OrgRecognizer {
    emphasis: Vec<(char, Regex)>,
    link: Regex,
}

impl OrgRecognizer {
    #[must_use]
    pub fn new() -> Self {
        let emphasis = EMPHASIS_MARKERS
            .iter()
            .map(|&marker| {
                let m = regex::escape(&marker.to_string());
                // Contents: one non-space character, or two with anything
                // except the marker between them.
                let pattern =
                    format!(r"{m}[^\s{marker}](?:[^{marker}]*?[^\s{marker}])?{m}");
                (marker, Regex::new(&pattern).unwrap())
            })
            .collect();
        Self {
            emphasis,
            link: Regex::new(r"\[\[([^\[\]]+)\](?:\[([^\[\]]+)\])?\]").unwrap(),
        }
    }
}

impl Default for OrgRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanRecognizer for OrgRecognizer {
    fn emphasis_spans(&self, text: &str) -> Vec<EmphasisSpan> {
        let mut spans = Vec::new();
        for (marker, pattern) in &self.emphasis {
            for found in pattern.find_iter(text) {
                if !on_word_boundary(text, found.start(), found.end()) {
                    continue;
                }
                // Markers are single-byte ASCII, so the contents sit one
                // byte inside the match on each side.
                let inner = &text[found.start() + 1..found.end() - 1];
                spans.push(EmphasisSpan {
                    range: found.range(),
                    marker: *marker,
                    inner: inner.to_owned(),
                });
            }
        }
        spans.sort_by_key(|span| span.range.start);
        drop_overlapping(spans)
    }

    fn link_spans(&self, text: &str) -> Vec<LinkSpan> {
        let mut spans = Vec::new();
        for caps in self.link.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            spans.push(LinkSpan {
                range: whole.range(),
                target: caps[1].to_owned(),
                text: caps.get(2).map(|m| m.as_str().to_owned()),
            });
        }
        spans
    }
}

/// Check the characters adjacent to a candidate span.
fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let pre_ok = text[..start]
        .chars()
        .next_back()
        .is_none_or(|c| PRE_BORDER.contains(&c));
    let post_ok = text[end..]
        .chars()
        .next()
        .is_none_or(|c| POST_BORDER.contains(&c));
    pre_ok && post_ok
}

/// Keep the earliest span at each position; later spans that start inside
/// an already-kept one are dropped.
fn drop_overlapping(spans: Vec<EmphasisSpan>) -> Vec<EmphasisSpan> {
    let mut kept = Vec::with_capacity(spans.len());
    let mut end = 0;
    for span in spans {
        if span.range.start >= end {
            end = span.range.end;
            kept.push(span);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detects_bold_span() {
        let spans = OrgRecognizer::new().emphasis_spans("a *bold* word");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, 2..8);
        assert_eq!(spans[0].marker, '*');
        assert_eq!(spans[0].inner, "bold");
    }

    #[test]
    fn test_span_at_text_edges() {
        let spans = OrgRecognizer::new().emphasis_spans("*whole*");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, 0..7);
    }

    #[test]
    fn test_rejects_midword_marker() {
        assert!(OrgRecognizer::new().emphasis_spans("file*name*ext").is_empty());
    }

    #[test]
    fn test_unterminated_marker_not_reported() {
        assert!(OrgRecognizer::new().emphasis_spans("an *open marker").is_empty());
    }

    #[test]
    fn test_punctuation_borders_accepted() {
        let spans = OrgRecognizer::new().emphasis_spans("(*aside*), then");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].inner, "aside");
    }

    #[test]
    fn test_multiple_spans_ordered() {
        let spans = OrgRecognizer::new().emphasis_spans("*a* and /b/ and +c+");
        let markers: Vec<char> = spans.iter().map(|s| s.marker).collect();
        assert_eq!(markers, vec!['*', '/', '+']);
        assert!(spans[0].range.end <= spans[1].range.start);
        assert!(spans[1].range.end <= spans[2].range.start);
    }

    #[test]
    fn test_monospace_marker_pair() {
        let spans = OrgRecognizer::new().emphasis_spans("=verbatim= and ~code~");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].marker, '=');
        assert_eq!(spans[1].marker, '~');
    }

    #[test]
    fn test_whitespace_adjacent_contents_rejected() {
        assert!(OrgRecognizer::new().emphasis_spans("a * spaced * b").is_empty());
    }

    #[test]
    fn test_link_with_description() {
        let spans = OrgRecognizer::new().link_spans("see [[https://example.com][the site]] here");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].target, "https://example.com");
        assert_eq!(spans[0].text.as_deref(), Some("the site"));
        assert_eq!(spans[0].range, 4..37);
    }

    #[test]
    fn test_link_without_description() {
        let spans = OrgRecognizer::new().link_spans("[[file.org]]");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].target, "file.org");
        assert_eq!(spans[0].text, None);
        assert_eq!(spans[0].range, 0..12);
    }

    #[test]
    fn test_plain_text_has_no_links() {
        assert!(OrgRecognizer::new().link_spans("[single] brackets").is_empty());
    }
}
