use thiserror::Error;

use crate::octet::OctetType;

/// Reason a single code point could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Start index {0} is outside of a buffer of length {1}")]
    OutOfBounds(usize, usize),

    #[error("Byte {0:#04X} can never appear in utf-8")]
    InvalidLead(u8),

    #[error("Continuation byte {0:#04X} cannot begin a sequence")]
    UnexpectedContinuation(u8),

    #[error("Sequence requires {expected} bytes but only {available} remain")]
    Truncated { expected: usize, available: usize },

    #[error("Expected a continuation byte at {index}, found {byte:#04X}")]
    NotContinuation { index: usize, byte: u8 },

    #[error("Code point {val:#06X} is overlong when encoded in {len} bytes")]
    Overlong { val: u32, len: usize },

    #[error("Code point {0:#06X} is a surrogate")]
    Surrogate(u32),

    #[error("Code point {0:#X} is above U+10FFFF")]
    OutOfRange(u32),
}

/// Reason a code point could not be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Value {0:#X} is not a unicode scalar value")]
    InvalidScalar(u32),

    #[error("Cannot encode a code point tagged as {0}")]
    InvalidOctetType(OctetType),

    #[error("Encoding requires {needed} bytes but only {available} are available")]
    Capacity { needed: usize, available: usize },
}

/// Location and reason of the first malformed sequence in a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid utf-8 after {valid_up_to} bytes")]
pub struct Utf8Error {
    /// Number of leading bytes which form complete, valid sequences
    pub valid_up_to: usize,
    pub source: DecodeError,
}

/// First value in a scalar buffer which cannot be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Value {val:#X} at index {index} is not a unicode scalar value")]
pub struct ScalarError {
    pub index: usize,
    pub val: u32,
}
