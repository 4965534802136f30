//! Error types for der-header.
//!
//! Every failure carries the buffer offset at which the decoder stopped,
//! so callers parsing a larger structure can report where the encoding
//! went wrong.

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Decode error kinds.
///
/// The kinds are mutually exclusive and all terminal: a failed decode
/// yields no header and no length, and calling again with the same input
/// produces the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Requested cursor position lies beyond the buffer bounds.
    InvalidPosition { position: usize, len: usize },
    /// Data truncated unexpectedly.
    UnexpectedEndOfData,
    /// Indefinite length not supported (BER-only form, forbidden in DER).
    IndefiniteLength,
    /// Tag number 31 announces the multi-octet high-tag-number form,
    /// which this decoder does not support.
    HighTagNumberUnsupported,
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPosition { position, len } => {
                write!(f, "position {} outside buffer of {} bytes", position, len)
            }
            Self::UnexpectedEndOfData => write!(f, "unexpected end of data"),
            Self::IndefiniteLength => write!(f, "indefinite length encoding not supported"),
            Self::HighTagNumberUnsupported => {
                write!(f, "high-tag-number form (tag number 31) not supported")
            }
        }
    }
}

/// Library error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("decode error at offset {offset}: {kind}")]
pub struct Error {
    /// Byte offset at which the error was detected.
    pub offset: usize,
    /// What went wrong.
    pub kind: DecodeErrorKind,
}

impl Error {
    /// Create a decode error.
    pub fn decode(offset: usize, kind: DecodeErrorKind) -> Self {
        Self { offset, kind }
    }
}
