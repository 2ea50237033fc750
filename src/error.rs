//! Error types of this crate.
use std::io;


/// Errors raised by a codec when a raw label or a class code
/// has no entry in its mapping table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The attribute label is neither the `0` nor the `1` label
    /// of its column.
    #[error("unrecognized label `{raw}` in attribute column {column}")]
    UnknownAttributeLabel {
        /// Zero-based attribute column.
        column: usize,
        /// The raw token read from the input.
        raw: String,
    },

    /// The class label is not in the class table.
    #[error("unrecognized class label `{raw}`")]
    UnknownClassLabel {
        /// The raw token read from the input.
        raw: String,
    },

    /// The class code is not in `[1, n_classes]`.
    #[error("class code {code} has no label")]
    UnknownClassCode {
        /// The offending class code.
        code: usize,
    },

    /// The codec has no table for this column.
    #[error("attribute column {column} is out of range (codec has {n_columns} columns)")]
    ColumnOutOfRange {
        /// Zero-based attribute column.
        column: usize,
        /// Number of attribute columns the codec knows.
        n_columns: usize,
    },
}


/// Errors of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A label could not be encoded or a class code decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Failure while reading or writing a file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The codec configuration file is not valid JSON
    /// or does not have the expected shape.
    #[error("invalid codec configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The input ended before all declared tokens were read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// What the reader was looking for.
        expected: &'static str,
    },

    /// A header count is not a non-negative integer.
    #[error("invalid {what}: `{token}` is not a non-negative integer")]
    InvalidCount {
        /// The offending token.
        token: String,
        /// Which count was being read.
        what: &'static str,
    },

    /// The number of attributes disagrees between two collaborators.
    #[error("expected {expected} attributes, got {got}")]
    ShapeMismatch {
        /// The number of attributes the caller expects.
        expected: usize,
        /// The number of attributes actually supplied.
        got: usize,
    },

    /// A class code is not in `[1, n_classes]`.
    #[error("class {class} is out of range [1, {n_classes}]")]
    ClassOutOfRange {
        /// The offending class code.
        class: usize,
        /// Number of classes of the record store.
        n_classes: usize,
    },

    /// An attribute value is neither `0` nor `1`.
    #[error("attribute value {value} is not binary")]
    AttributeOutOfRange {
        /// The offending value.
        value: u8,
    },
}


/// A `Result` alias with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
