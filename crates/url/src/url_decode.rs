//! Percent-decoding with the `+`-for-space form convention.

use serde::{Deserialize, Serialize};

use crate::constants::{hex_value, ESCAPE, PLUS};
use crate::UrlError;

/// What the decoder does with a `%` that is not followed by two hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedEscapePolicy {
    /// Emit the `%` literally and keep scanning from the next byte.
    #[default]
    PassThrough,
    /// Fail with [`UrlError::MalformedPercentSequence`].
    Reject,
}

enum Piece {
    Byte(u8),
    Malformed { position: usize },
}

/// Splits `input` into decoded bytes and malformed escapes, left to right.
fn pieces(input: &[u8]) -> impl Iterator<Item = Piece> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        let byte = *input.get(pos)?;
        let piece = match byte {
            PLUS => Piece::Byte(b' '),
            ESCAPE => match escaped_byte(&input[pos + 1..]) {
                Some(decoded) => {
                    pos += 2;
                    Piece::Byte(decoded)
                }
                None => Piece::Malformed { position: pos },
            },
            other => Piece::Byte(other),
        };
        pos += 1;
        Some(piece)
    })
}

#[inline]
fn escaped_byte(rest: &[u8]) -> Option<u8> {
    match rest {
        [hi, lo, ..] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
        _ => None,
    }
}

/// Decodes a URL-encoded byte string.
///
/// `+` becomes a space and `%XX` (either hex case) becomes the byte it
/// names; everything else is copied. A `%` without two hex digits after it
/// is copied literally and the bytes after it are decoded normally, so
/// `"%zz"` stays `"%zz"` and `"%%41"` becomes `"%A"`.
///
/// The output is raw bytes since escapes may produce invalid UTF-8; see
/// [`url_decode_to_string`] for text.
///
/// # Example
///
/// ```
/// use netcodec_url::url_decode;
///
/// assert_eq!(url_decode("a%20value+with%20spaces"), b"a value with spaces");
/// assert_eq!(url_decode("100%"), b"100%");
/// ```
pub fn url_decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    let input = input.as_ref();
    let mut out = Vec::with_capacity(input.len());
    for piece in pieces(input) {
        match piece {
            Piece::Byte(byte) => out.push(byte),
            Piece::Malformed { position } => {
                tracing::trace!(position, "passing malformed percent escape through");
                out.push(ESCAPE);
            }
        }
    }
    out
}

/// Decodes a URL-encoded byte string under an explicit malformed-escape
/// policy.
///
/// # Errors
///
/// With [`MalformedEscapePolicy::Reject`], returns
/// [`UrlError::MalformedPercentSequence`] pointing at the first bad `%`.
/// With [`MalformedEscapePolicy::PassThrough`] this never fails and agrees
/// with [`url_decode`].
///
/// # Example
///
/// ```
/// use netcodec_url::{url_decode_with, MalformedEscapePolicy, UrlError};
///
/// assert_eq!(
///     url_decode_with("50%+off", MalformedEscapePolicy::Reject),
///     Err(UrlError::MalformedPercentSequence { position: 2 })
/// );
/// assert_eq!(
///     url_decode_with("50%+off", MalformedEscapePolicy::PassThrough).unwrap(),
///     b"50% off"
/// );
/// ```
pub fn url_decode_with(
    input: impl AsRef<[u8]>,
    policy: MalformedEscapePolicy,
) -> Result<Vec<u8>, UrlError> {
    let input = input.as_ref();
    if policy == MalformedEscapePolicy::PassThrough {
        return Ok(url_decode(input));
    }

    let mut out = Vec::with_capacity(input.len());
    for piece in pieces(input) {
        match piece {
            Piece::Byte(byte) => out.push(byte),
            Piece::Malformed { position } => {
                tracing::debug!(position, "rejected malformed percent escape");
                return Err(UrlError::MalformedPercentSequence { position });
            }
        }
    }
    Ok(out)
}

/// Decodes a URL-encoded string and validates the result as UTF-8.
///
/// # Errors
///
/// Returns [`UrlError::InvalidUtf8`] if the decoded bytes are not UTF-8.
///
/// # Example
///
/// ```
/// use netcodec_url::url_decode_to_string;
///
/// assert_eq!(url_decode_to_string("caf%C3%A9").unwrap(), "café");
/// assert!(url_decode_to_string("%FF").is_err());
/// ```
pub fn url_decode_to_string(input: impl AsRef<[u8]>) -> Result<String, UrlError> {
    Ok(String::from_utf8(url_decode(input))?)
}
