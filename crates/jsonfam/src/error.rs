use thiserror::Error;

/// Errors produced while parsing, building, or querying JSON values.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text violated the (lenient) JSON grammar. The offset is a
    /// byte position into the source, just past the offending character.
    #[error("syntax error: {message} at offset {offset}")]
    Syntax {
        /// What the tokenizer or parser was expecting.
        message: &'static str,
        /// Byte offset into the source text.
        offset: usize,
    },
    /// A key was inserted twice through a `put_once` path.
    #[error("duplicate key {0:?}")]
    DuplicateKey(String),
    /// NaN or an infinity was handed to a builder or mutator.
    #[error("JSON does not allow non-finite numbers")]
    NonFinite,
    /// A `get` accessor was asked for a key or index that is absent.
    #[error("{0} not found")]
    Missing(String),
    /// A typed accessor or mutator found a value of the wrong shape.
    #[error("{target} is not {expected}")]
    Mismatch {
        /// Which slot was being read or written.
        target: String,
        /// The shape that was required, e.g. "a number".
        expected: &'static str,
    },
    /// An underlying reader failed while sourcing text to parse.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
