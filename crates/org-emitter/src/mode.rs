//! Block modes and their HTML tag associations.

/// A block-kind tag controlling nesting and tag emission.
///
/// Pushing a mode with a container tag wraps everything until the matching
/// pop; a mode with a block tag instead wraps each flushed content unit
/// while it is the current output kind. [`Mode::Code`] carries a container
/// (`<pre>`) but no block tag: its content is whitespace-significant and
/// is flushed verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Paragraph,
    UnorderedListItem,
    OrderedListItem,
    TableRow,
    UnorderedList,
    OrderedList,
    Table,
    Blockquote,
    Code,
}

impl Mode {
    /// Wrapping tag pair emitted once on push and pop of this mode.
    #[must_use]
    pub fn container_tag(self) -> Option<(&'static str, &'static str)> {
        match self {
            Mode::UnorderedList => Some(("<ul>", "</ul>")),
            Mode::OrderedList => Some(("<ol>", "</ol>")),
            Mode::Table => Some(("<table>", "</table>")),
            Mode::Blockquote => Some(("<blockquote>", "</blockquote>")),
            Mode::Code => Some(("<pre>", "</pre>")),
            Mode::Paragraph
            | Mode::UnorderedListItem
            | Mode::OrderedListItem
            | Mode::TableRow => None,
        }
    }

    /// Tag wrapped around each flushed content unit while this mode is the
    /// current output kind.
    #[must_use]
    pub fn block_tag(self) -> Option<&'static str> {
        match self {
            Mode::Paragraph => Some("p"),
            Mode::UnorderedListItem | Mode::OrderedListItem => Some("li"),
            Mode::TableRow => Some("tr"),
            Mode::UnorderedList
            | Mode::OrderedList
            | Mode::Table
            | Mode::Blockquote
            | Mode::Code => None,
        }
    }
}
