//! Standard base64 encoding function.

use crate::constants::{encoded_len, ALPHABET_BYTES, PAD, TABLE2};

/// Encodes a byte slice to a standard base64 string.
///
/// Never fails. The output uses the RFC 4648 alphabet, is padded with `=` to
/// a multiple of four characters and contains no line breaks.
///
/// # Example
///
/// ```
/// use netcodec_base64::to_base64;
///
/// assert_eq!(to_base64(b"Man"), "TWFu");
/// assert_eq!(to_base64(b"M"), "TQ==");
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(input: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(input.len()));

    let mut chunks = input.chunks_exact(3);
    for chunk in &mut chunks {
        let (o1, o2, o3) = (chunk[0], chunk[1], chunk[2]);
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);
        push_pair(&mut out, v1);
        push_pair(&mut out, v2);
    }

    match chunks.remainder() {
        [o1] => {
            push_pair(&mut out, (*o1 as usize) << 4);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            push_pair(&mut out, ((*o1 as usize) << 4) | ((*o2 as usize) >> 4));
            out.push(ALPHABET_BYTES[((*o2 & 0b1111) as usize) << 2] as char);
            out.push(PAD);
        }
        _ => {}
    }

    out
}

#[inline]
fn push_pair(out: &mut String, index: usize) {
    let [a, b] = TABLE2[index];
    out.push(a as char);
    out.push(b as char);
}
