//! Mode-stack HTML assembly for Org document events.
//!
//! This crate turns the event stream of an Org parser — block pushes and
//! pops plus raw inline text — into nested, escaped HTML. [`HtmlEmitter`]
//! owns the output sink and all per-document state; locating emphasis and
//! link spans is delegated to a
//! [`SpanRecognizer`](org_markup::SpanRecognizer) from the `org-markup`
//! crate.
//!
//! # Architecture
//!
//! - [`Mode`]: closed set of block kinds with container and block tags
//! - [`HtmlEmitter`]: mode stack, accumulation buffer, flush orchestration
//! - [`escape_html`]: buffered text is escaped before any inline rewriting
//! - `inline`: emphasis, link, and table-cell rewriting (internal)
//!
//! # Example
//!
//! ```
//! use org_emitter::{HtmlEmitter, Mode};
//! use org_markup::OrgRecognizer;
//!
//! # fn main() -> Result<(), org_emitter::EmitError> {
//! let mut emitter = HtmlEmitter::new(OrgRecognizer::new());
//! emitter.push(Mode::Blockquote);
//! emitter.set_output_kind(Mode::Paragraph);
//! emitter.append("Escaping &: *always* first")?;
//! emitter.flush()?;
//! emitter.pop(Some(Mode::Blockquote))?;
//! assert_eq!(
//!     emitter.into_html(),
//!     "<blockquote>\n<p>Escaping &amp;: <b>always</b> first</p>\n</blockquote>\n"
//! );
//! # Ok(())
//! # }
//! ```

mod emitter;
mod error;
mod escape;
mod inline;
mod mode;

pub use emitter::HtmlEmitter;
pub use error::EmitError;
pub use escape::escape_html;
pub use mode::Mode;
