//! The error types raised while encoding or decoding canonical bytes.

use thiserror::Error;

/// Errors due to a field that cannot be put into, or read back from, its canonical form.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EncodingError {
    /// A fixed-size field has the wrong number of bytes.
    #[error("InvalidLength({field}): expected {expected} bytes, actual {actual}")]
    InvalidLength {
        /// The name of the field.
        field: &'static str,
        /// The canonical length.
        expected: usize,
        /// The length found.
        actual: usize,
    },

    /// A variable-size field is larger than its length prefix can express.
    #[error("Oversized({field}): at most {max} bytes, actual {actual}")]
    Oversized {
        /// The name of the field.
        field: &'static str,
        /// The largest accepted length.
        max: usize,
        /// The length found.
        actual: usize,
    },

    /// The byte is not a known script hash type.
    #[error("InvalidHashType({0:#04x})")]
    InvalidHashType(u8),

    /// The byte is not a known dep type.
    #[error("InvalidDepType({0:#04x})")]
    InvalidDepType(u8),

    /// A string is not valid 0x-prefixed hexadecimal.
    #[error("InvalidHex({0})")]
    InvalidHex(String),
}
