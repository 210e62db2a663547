use std::io;

use thiserror::Error;

/// Error type for binary parsing.
///
/// Every variant aborts the parse; nothing partial is returned.
#[derive(Debug, Error)]
pub enum BinaryError {
    #[error("unexpected end of stream while reading {what}")]
    Truncated { what: &'static str },
    #[error("unknown tag 0x{tag:02x} at offset {offset}")]
    UnknownTag { tag: u8, offset: u64 },
    #[error("expected map key tag 'k' at offset {offset}, found 0x{found:02x}")]
    MissingKeyTag { found: u8, offset: u64 },
    #[error("expected '{expected}' at offset {offset}, found 0x{found:02x}")]
    MissingTerminator { expected: char, found: u8, offset: u64 },
    #[error("negative length {length} at offset {offset}")]
    NegativeLength { length: i32, offset: u64 },
    #[error("string payload at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: u64 },
    #[error("date payload {seconds} is not a representable instant")]
    InvalidDate { seconds: f64 },
    #[error("container nesting exceeds depth limit {limit}")]
    DepthLimitExceeded { limit: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl BinaryError {
    /// The stream ended before a declared or fixed-width payload was complete.
    pub fn is_truncated(&self) -> bool {
        matches!(self, BinaryError::Truncated { .. })
    }

    /// The stream contained bytes the grammar does not allow.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            BinaryError::UnknownTag { .. }
                | BinaryError::MissingKeyTag { .. }
                | BinaryError::MissingTerminator { .. }
                | BinaryError::NegativeLength { .. }
                | BinaryError::InvalidUtf8 { .. }
                | BinaryError::InvalidDate { .. }
        )
    }
}
