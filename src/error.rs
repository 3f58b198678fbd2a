//! Error types for the core compression/decompression API.
//!
//! Plain enums with hand-written `Display`/`Error` impls, matching the style
//! of `jafreck-lz4r/src/frame/types.rs`'s `Lz4FError` rather than deriving
//! from `thiserror` — the teacher's library core does the same and only
//! reaches for `anyhow` at the CLI boundary.

use std::fmt;

/// Errors returned by [`crate::compress::compress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressError {
    /// The input buffer exceeds the configured window/size limits.
    InputTooLarge { len: usize, max: usize },
    /// The input is too short to compress meaningfully (spec minimum: 1 byte).
    InputTooShort,
    /// `Config::ascii` was set but the input contains a byte with the top bit set.
    AsciiViolation { pos: usize, byte: u8 },
    /// The encoded output would be no smaller than the input; the caller
    /// should store the input unmodified instead.
    Incompressible,
    /// A `Config` field is out of its valid range.
    InvalidConfig(&'static str),
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressError::InputTooLarge { len, max } => {
                write!(f, "input of {len} bytes exceeds the {max} byte limit")
            }
            CompressError::InputTooShort => write!(f, "input is too short to compress"),
            CompressError::AsciiViolation { pos, byte } => write!(
                f,
                "byte {byte:#04x} at offset {pos} is not 7-bit ASCII but --ascii was requested"
            ),
            CompressError::Incompressible => {
                write!(f, "input did not compress; store it unmodified instead")
            }
            CompressError::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for CompressError {}

/// Errors returned by [`crate::decoder::decompress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is shorter than the fixed header size.
    TruncatedHeader,
    /// A token's bit code or back-reference runs past the end of the input.
    Truncated,
    /// A match's `(offset, length)` back-reference points before the start
    /// of the output buffer.
    InvalidBackReference { pos: usize, offset: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TruncatedHeader => write!(f, "input is shorter than the header size"),
            DecodeError::Truncated => write!(f, "input ends before a token could be decoded"),
            DecodeError::InvalidBackReference { pos, offset } => write!(
                f,
                "back-reference at output position {pos} with offset {offset} points before the start of the buffer"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}
