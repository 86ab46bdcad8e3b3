//! The output-assembly facade: mode stack, text buffer, flush.

use std::fmt::Write;

use org_markup::SpanRecognizer;

use crate::error::EmitError;
use crate::escape::escape_html;
use crate::inline::format_inline;
use crate::mode::Mode;

/// Width of one indentation step.
const INDENT: &str = "  ";

/// Assembles pushed block modes and appended text into indented HTML.
///
/// One emitter owns the output of one document-rendering session: the
/// driving parser pushes a [`Mode`], appends raw text, flushes, and pops,
/// and the emitter keeps tag nesting symmetric while escaping buffered
/// text before any inline rewriting. Render a second document with a
/// second emitter; nothing is shared between instances.
///
/// # Example
///
/// ```
/// use org_emitter::{HtmlEmitter, Mode};
/// use org_markup::OrgRecognizer;
///
/// # fn main() -> Result<(), org_emitter::EmitError> {
/// let mut emitter = HtmlEmitter::new(OrgRecognizer::new());
/// emitter.set_output_kind(Mode::Paragraph);
/// emitter.append("Hello, *world*")?;
/// emitter.flush()?;
/// assert_eq!(emitter.into_html(), "<p>Hello, <b>world</b></p>\n");
/// # Ok(())
/// # }
/// ```
pub struct HtmlEmitter<R> {
    recognizer: R,
    output: String,
    mode_stack: Vec<Mode>,
    buffer: String,
    output_kind: Option<Mode>,
    decoration: Option<String>,
}

impl<R: SpanRecognizer> HtmlEmitter<R> {
    /// Create an emitter writing to a fresh output sink.
    #[must_use]
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            output: String::with_capacity(4096),
            mode_stack: Vec::new(),
            buffer: String::new(),
            output_kind: None,
            decoration: None,
        }
    }

    /// Decorate the first emitted block tag with `class="title"`.
    #[must_use]
    pub fn with_title_decoration(mut self) -> Self {
        self.decoration = Some(r#"class="title""#.to_owned());
        self
    }

    /// Enter a nested block context.
    ///
    /// A mode with a container tag emits its open tag at the current depth.
    /// Entering such a container also drops any pending decoration.
    pub fn push(&mut self, mode: Mode) {
        tracing::trace!(?mode, depth = self.mode_stack.len(), "Entering block");
        if let Some((open, _)) = mode.container_tag() {
            self.write_indentation();
            self.output.push_str(open);
            self.output.push('\n');
            self.decoration = None;
        }
        self.mode_stack.push(mode);
    }

    /// Leave the innermost block context, returning the removed mode.
    ///
    /// When `expected` names a mode it must equal the innermost one; a
    /// mismatch or an empty stack is a contract violation.
    pub fn pop(&mut self, expected: Option<Mode>) -> Result<Mode, EmitError> {
        let top = self
            .mode_stack
            .last()
            .copied()
            .ok_or(EmitError::StackUnderflow)?;
        if let Some(requested) = expected
            && requested != top
        {
            return Err(EmitError::ModeMismatch { requested, top });
        }
        self.mode_stack.pop();
        tracing::trace!(mode = ?top, depth = self.mode_stack.len(), "Leaving block");
        if let Some((_, close)) = top.container_tag() {
            self.write_indentation();
            self.output.push_str(close);
            self.output.push('\n');
        }
        Ok(top)
    }

    /// Declare which block-tag semantics the next flush uses.
    pub fn set_output_kind(&mut self, kind: Mode) {
        self.output_kind = Some(kind);
    }

    /// Arm a one-shot attribute for the next emitted block tag.
    ///
    /// Consumed by the first flush that emits a block tag, or dropped when
    /// a container mode is pushed before that happens.
    pub fn set_decoration(&mut self, attr: Option<String>) {
        self.decoration = attr;
    }

    /// Append raw text to the buffer for the pending flush.
    ///
    /// An output kind must have been set first; text with no declared kind
    /// is a contract violation.
    pub fn append(&mut self, text: &str) -> Result<(), EmitError> {
        if self.output_kind.is_none() {
            return Err(EmitError::MissingOutputKind);
        }
        self.buffer.push_str(text);
        Ok(())
    }

    /// Commit buffered text to the output sink.
    ///
    /// The buffer is escaped exactly once, then either written verbatim
    /// with a trailing newline (code) or wrapped in the output kind's
    /// block tag with inline formatting applied. The buffer is cleared in
    /// every case, including the empty no-op flush.
    pub fn flush(&mut self) -> Result<(), EmitError> {
        let buffer = std::mem::take(&mut self.buffer);
        tracing::debug!(kind = ?self.output_kind, buffered = buffer.len(), "Flushing block");
        let escaped = escape_html(&buffer);
        match self.output_kind {
            // Whitespace is significant in code: no block tag, no inline
            // rewriting, only the escape pass above.
            Some(Mode::Code) => {
                self.output.push_str(&escaped);
                self.output.push('\n');
            }
            _ if escaped.is_empty() => {}
            Some(kind) => {
                let Some(tag) = kind.block_tag() else {
                    return Err(EmitError::UnknownOutputKind(kind));
                };
                let content = format_inline(&self.recognizer, kind, &escaped);
                self.write_indentation();
                match self.decoration.take() {
                    Some(attr) => write!(self.output, "<{tag} {attr}>").unwrap(),
                    None => write!(self.output, "<{tag}>").unwrap(),
                }
                self.output.push_str(&content);
                writeln!(self.output, "</{tag}>").unwrap();
            }
            None => return Err(EmitError::MissingOutputKind),
        }
        Ok(())
    }

    /// Borrow the HTML produced so far.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.output
    }

    /// Current block nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.mode_stack.len()
    }

    /// Consume the emitter and return the rendered fragment.
    #[must_use]
    pub fn into_html(self) -> String {
        self.output
    }

    fn write_indentation(&mut self) {
        for _ in 1..self.mode_stack.len() {
            self.output.push_str(INDENT);
        }
    }
}
