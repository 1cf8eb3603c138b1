//! Error types for sequence operations.
//!
//! Every fallible operation returns [`SeqError`]. Operations that have an
//! `*_or_null` / `*_or_else` counterpart fail here only because the caller
//! picked the throwing variant; the sentinel variants never construct one.

use alloc::string::String;

use thiserror::Error;

/// Error raised by a sequence operation.
///
/// Each variant records the name of the operation that failed so the message
/// points at the offending call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// The operation needs at least one element (or one match) and found none.
    #[error("`{op}` on an empty sequence: {detail}")]
    EmptyInput { op: &'static str, detail: &'static str },

    /// More than one element matched where exactly one was required.
    #[error("`{op}` found more than one matching element")]
    AmbiguousMatch { op: &'static str },

    /// A count, size or range argument was rejected.
    #[error("invalid argument to `{op}`: {reason}")]
    InvalidArgument { op: &'static str, reason: String },

    /// Direct indexed access outside `[0, len)`.
    #[error("`{op}` index {index} out of range for length {len}")]
    IndexOutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },
}

/// Fieldless discriminant of [`SeqError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    AmbiguousMatch,
    InvalidArgument,
    IndexOutOfRange,
}

impl SeqError {
    /// Returns the kind of this error, ignoring its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeqError::EmptyInput { .. } => ErrorKind::EmptyInput,
            SeqError::AmbiguousMatch { .. } => ErrorKind::AmbiguousMatch,
            SeqError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            SeqError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }

    /// Name of the operation that raised this error.
    pub fn op(&self) -> &'static str {
        match self {
            SeqError::EmptyInput { op, .. }
            | SeqError::AmbiguousMatch { op }
            | SeqError::InvalidArgument { op, .. }
            | SeqError::IndexOutOfRange { op, .. } => op,
        }
    }

    pub(crate) fn empty_input(op: &'static str, detail: &'static str) -> Self {
        tracing::debug!(op, detail, "sequence operation rejected empty input");
        SeqError::EmptyInput { op, detail }
    }

    pub(crate) fn ambiguous_match(op: &'static str) -> Self {
        tracing::debug!(op, "sequence operation found more than one match");
        SeqError::AmbiguousMatch { op }
    }

    pub(crate) fn invalid_argument(op: &'static str, reason: String) -> Self {
        tracing::debug!(op, reason = %reason, "sequence operation rejected an argument");
        SeqError::InvalidArgument { op, reason }
    }

    pub(crate) fn index_out_of_range(op: &'static str, index: usize, len: usize) -> Self {
        tracing::debug!(op, index, len, "sequence index out of range");
        SeqError::IndexOutOfRange { op, index, len }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = SeqError> = core::result::Result<T, E>;

static_assertions::assert_impl_all!(SeqError: Send, Sync, Clone, core::error::Error);
static_assertions::assert_impl_all!(ErrorKind: Send, Sync, Copy);
