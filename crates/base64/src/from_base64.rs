//! Standard base64 decoding function.

use crate::{from_base64_bin, Base64Error};

/// Decodes a standard, padded base64 string.
///
/// The text is decoded byte by byte, so any non-ASCII character is reported
/// as an invalid symbol at the position of its first UTF-8 byte. See
/// [`from_base64_bin`] for the exact acceptance rules.
///
/// # Example
///
/// ```
/// use netcodec_base64::{from_base64, Base64Error};
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(from_base64("").unwrap(), b"");
/// assert_eq!(
///     from_base64("SGVsbG8"),
///     Err(Base64Error::InvalidLength { length: 7 })
/// );
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    from_base64_bin(encoded.as_bytes())
}
