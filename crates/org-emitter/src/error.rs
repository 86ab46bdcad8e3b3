//! Errors for caller-contract violations.

use crate::mode::Mode;

/// Error returned when a caller violates the emitter contract.
///
/// Every variant is fatal: the render that produced one cannot be resumed
/// and its partial output must be discarded.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// `pop` was called on an empty mode stack.
    #[error("mode stack underflow: no open block to pop")]
    StackUnderflow,
    /// `pop` named a mode that is not the innermost open block.
    #[error("cannot pop {requested:?}: innermost open block is {top:?}")]
    ModeMismatch {
        /// Mode the caller asked to pop.
        requested: Mode,
        /// Mode actually on top of the stack.
        top: Mode,
    },
    /// `flush` found buffered text under a mode with no block tag.
    #[error("mode {0:?} cannot carry flushed content")]
    UnknownOutputKind(Mode),
    /// `append` or `flush` ran before any output kind was set.
    #[error("no output kind set for buffered text")]
    MissingOutputKind,
}
