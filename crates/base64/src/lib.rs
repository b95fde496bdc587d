//! Base64 encoding and decoding utilities.
//!
//! This crate provides the standard RFC 4648 base64 codec with `=` padding:
//! - Encoding to a `String` or into a caller-provided byte buffer
//! - Strict decoding from `&str` or raw bytes, rejecting anything outside
//!   the alphabet, misplaced padding and truncated input
//!
//! # Example
//!
//! ```
//! use netcodec_base64::{to_base64, from_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod from_base64_bin;
mod to_base64;
mod to_base64_bin;

pub use constants::{decoded_len_estimate, encoded_len, ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE};
pub use from_base64::from_base64;
pub use from_base64_bin::from_base64_bin;
pub use to_base64::to_base64;
pub use to_base64_bin::to_base64_bin;

/// Error type for base64 decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The input contains a byte that is neither an alphabet symbol nor padding.
    #[error("invalid base64 symbol 0x{byte:02x} at position {position}")]
    InvalidSymbol { position: usize, byte: u8 },
    /// Padding appears before the final two positions, or more than twice.
    #[error("misplaced base64 padding at position {position}")]
    InvalidPadding { position: usize },
    /// The input length is not a multiple of 4.
    #[error("base64 length {length} is not a multiple of 4")]
    InvalidLength { length: usize },
}
