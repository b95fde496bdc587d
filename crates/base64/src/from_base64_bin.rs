//! Binary base64 decoding function.

use crate::constants::{decoded_len_estimate, DECODE_TABLE, INVALID, PAD_BYTE};
use crate::Base64Error;

/// Decodes standard, padded base64 from a byte slice.
///
/// Decoding is strict: every byte must be one of the 64 alphabet symbols,
/// except for at most two `=` bytes at the very end, and the length must be
/// a multiple of four. Whitespace and line breaks are rejected, not skipped.
/// Empty input decodes to an empty vector.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if the length is not a multiple of four.
/// - [`Base64Error::InvalidPadding`] for `=` outside the final two positions
///   or more than two trailing `=`.
/// - [`Base64Error::InvalidSymbol`] for any other byte outside the alphabet.
///
/// # Example
///
/// ```
/// use netcodec_base64::{from_base64_bin, Base64Error};
///
/// assert_eq!(from_base64_bin(b"TWFu").unwrap(), b"Man");
/// assert_eq!(
///     from_base64_bin(b"TQ=A"),
///     Err(Base64Error::InvalidPadding { position: 2 })
/// );
/// ```
pub fn from_base64_bin(input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    decode(input).inspect_err(|err| {
        tracing::debug!(length = input.len(), %err, "rejected base64 input");
    })
}

fn decode(input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let length = input.len();
    if length == 0 {
        return Ok(Vec::new());
    }
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength { length });
    }

    let padding = input.iter().rev().take_while(|&&b| b == PAD_BYTE).count();
    if padding > 2 {
        return Err(Base64Error::InvalidPadding {
            position: length - padding,
        });
    }

    let main_end = if padding > 0 { length - 4 } else { length };
    let mut buf = Vec::with_capacity(decoded_len_estimate(length) - padding);

    for (group, quad) in input[..main_end].chunks_exact(4).enumerate() {
        let at = group * 4;
        let sextet0 = sextet(quad[0], at)?;
        let sextet1 = sextet(quad[1], at + 1)?;
        let sextet2 = sextet(quad[2], at + 2)?;
        let sextet3 = sextet(quad[3], at + 3)?;

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push((sextet1 << 4) | (sextet2 >> 2));
        buf.push((sextet2 << 6) | sextet3);
    }

    if padding == 0 {
        return Ok(buf);
    }

    let sextet0 = sextet(input[main_end], main_end)?;
    let sextet1 = sextet(input[main_end + 1], main_end + 1)?;
    buf.push((sextet0 << 2) | (sextet1 >> 4));

    if padding == 1 {
        let sextet2 = sextet(input[main_end + 2], main_end + 2)?;
        buf.push((sextet1 << 4) | (sextet2 >> 2));
    }

    Ok(buf)
}

#[inline]
fn sextet(byte: u8, position: usize) -> Result<u8, Base64Error> {
    match DECODE_TABLE[byte as usize] {
        INVALID if byte == PAD_BYTE => Err(Base64Error::InvalidPadding { position }),
        INVALID => Err(Base64Error::InvalidSymbol { position, byte }),
        value => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_positions() {
        assert_eq!(from_base64_bin(b"TQ==").unwrap(), b"M");
        assert_eq!(from_base64_bin(b"TWE=").unwrap(), b"Ma");
        assert_eq!(
            from_base64_bin(b"T==="),
            Err(Base64Error::InvalidPadding { position: 1 })
        );
        assert_eq!(
            from_base64_bin(b"===="),
            Err(Base64Error::InvalidPadding { position: 0 })
        );
        assert_eq!(
            from_base64_bin(b"TQ==TWFu"),
            Err(Base64Error::InvalidPadding { position: 2 })
        );
    }

    #[test]
    fn test_symbol_position() {
        assert_eq!(
            from_base64_bin(b"TWFuTW u"),
            Err(Base64Error::InvalidSymbol {
                position: 6,
                byte: b' '
            })
        );
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(
            from_base64_bin(&[b'T', b'W', 0xC3, b'u']),
            Err(Base64Error::InvalidSymbol {
                position: 2,
                byte: 0xC3
            })
        );
    }

    #[test]
    fn test_length() {
        assert_eq!(
            from_base64_bin(b"TWF"),
            Err(Base64Error::InvalidLength { length: 3 })
        );
    }
}
