//! Error types for parsing, building, and record binding.

use thiserror::Error;

/// Failures that can occur while parsing JSON or binding it to records.
///
/// This is a closed set: every fallible operation in the crate returns one
/// of these kinds. The "record type required" argument error of the
/// discovery-based original is a compile-time trait bound here, so
/// [`BindError::Argument`] only covers dynamic violations such as a store
/// key escaping its directory.
#[derive(Error, Debug)]
pub enum BindError {
    /// A typed entry point saw a leading token that is not the expected
    /// structural opener (`bind` expects `{`).
    #[error("format error: {0}")]
    Format(String),

    /// The underlying byte stream failed while reading, or its bytes were
    /// not valid UTF-8. The original cause is carried along.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// The canonical constructor rejected the resolved positional values
    /// (arity or type mismatch).
    #[error("binding error: {0}")]
    Binding(String),

    /// A dynamic argument violation.
    #[error("invalid argument: {0}")]
    Argument(String),
}

/// Convenience alias used throughout recbind-core.
pub type Result<T> = std::result::Result<T, BindError>;
