//! Inline markup recognition for Org-style text.
//!
//! This crate locates emphasis and link spans inside a run of text without
//! deciding how they render. Consumers (such as the `org-emitter` crate)
//! receive the spans with their byte ranges and perform their own
//! substitution.
//!
//! # Architecture
//!
//! - [`SpanRecognizer`]: the recognition boundary as a trait
//! - [`OrgRecognizer`]: regex-backed implementation of Org syntax
//! - [`EmphasisSpan`] / [`LinkSpan`]: matches with byte ranges
//!
//! # Example
//!
//! ```
//! use org_markup::{OrgRecognizer, SpanRecognizer};
//!
//! let recognizer = OrgRecognizer::new();
//! let spans = recognizer.emphasis_spans("a *bold* word");
//! assert_eq!(spans.len(), 1);
//! assert_eq!(spans[0].marker, '*');
//! assert_eq!(spans[0].inner, "bold");
//! ```

mod org;
mod recognizer;
mod span;

pub use org::OrgRecognizer;
pub use recognizer::SpanRecognizer;
pub use span::{EmphasisSpan, LinkSpan};
