//! Inline formatting applied to escaped block content.
//!
//! The pipeline runs after escaping and before the block tag closes:
//! trailing whitespace is dropped, recognized emphasis and link spans are
//! rewritten to their HTML forms, and table rows are split into cells.
//! Cell splitting runs last so tag text introduced by the rewrites is
//! never mistaken for a `|` delimiter.

use std::fmt::Write;

use org_markup::SpanRecognizer;

use crate::mode::Mode;

/// Tag pair for a one-character emphasis marker.
///
/// `=` and `~` intentionally render the same way.
fn emphasis_tag(marker: char) -> Option<(&'static str, &'static str)> {
    match marker {
        '*' => Some(("<b>", "</b>")),
        '/' => Some(("<i>", "</i>")),
        '_' => Some((r#"<span style="text-decoration:underline;">"#, "</span>")),
        '=' | '~' => Some(("<code>", "</code>")),
        '+' => Some(("<del>", "</del>")),
        _ => None,
    }
}

/// Apply the full inline pipeline for `kind` to escaped text.
pub(crate) fn format_inline<R: SpanRecognizer>(recognizer: &R, kind: Mode, text: &str) -> String {
    let text = text.trim_end();
    let text = rewrite_emphasis(recognizer, text);
    let text = rewrite_links(recognizer, &text);
    if kind == Mode::TableRow {
        split_table_cells(&text)
    } else {
        text
    }
}

fn rewrite_emphasis<R: SpanRecognizer>(recognizer: &R, text: &str) -> String {
    let spans = recognizer.emphasis_spans(text);
    if spans.is_empty() {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.range.start]);
        if let Some((open, close)) = emphasis_tag(span.marker) {
            out.push_str(open);
            out.push_str(&span.inner);
            out.push_str(close);
        } else {
            // Marker outside the tag table: leave the span as written.
            out.push_str(&text[span.range.clone()]);
        }
        cursor = span.range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn rewrite_links<R: SpanRecognizer>(recognizer: &R, text: &str) -> String {
    let spans = recognizer.link_spans(text);
    if spans.is_empty() {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.range.start]);
        let display = span.text.as_deref().unwrap_or(&span.target);
        write!(out, r#"<a href="{}">{display}</a>"#, span.target).unwrap();
        cursor = span.range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Split a table row on `|` delimiters into balanced `<td>` cells.
///
/// A leading pipe opens the first cell and a trailing pipe closes the
/// last; interior pipes close one cell and open the next, with the
/// whitespace around each delimiter dropped.
fn split_table_cells(text: &str) -> String {
    let mut body = text;
    let mut out = String::with_capacity(text.len() + 16);
    if let Some(rest) = body.strip_prefix('|') {
        out.push_str("<td>");
        body = rest.trim_start();
    }
    let trailing = body.strip_suffix('|').map(str::trim_end);
    if let Some(rest) = trailing {
        body = rest;
    }
    let fields: Vec<&str> = body.split('|').collect();
    let last = fields.len() - 1;
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str("</td><td>");
        }
        let mut cell = *field;
        if i > 0 {
            cell = cell.trim_start();
        }
        if i < last {
            cell = cell.trim_end();
        }
        out.push_str(cell);
    }
    if trailing.is_some() {
        out.push_str("</td>");
    }
    out
}
