//! Binary base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE, TABLE2};

/// Encodes bytes into a destination byte slice using standard base64.
///
/// Writing starts at `offset`; the return value is the offset just past the
/// last byte written, so `&dest[offset..end]` is the encoding. Used to append
/// an encoded value to a header buffer without an intermediate `String`.
///
/// # Panics
///
/// Panics if `dest` has fewer than `offset + encoded_len(input.len())` bytes.
///
/// # Example
///
/// ```
/// use netcodec_base64::{encoded_len, to_base64_bin};
///
/// let mut dest = b"Basic ".to_vec();
/// dest.resize(6 + encoded_len(13), 0);
/// let end = to_base64_bin(b"user:password", &mut dest, 6);
/// assert_eq!(&dest[..end], b"Basic dXNlcjpwYXNzd29yZA==");
/// ```
pub fn to_base64_bin(input: &[u8], dest: &mut [u8], mut offset: usize) -> usize {
    let extra_length = input.len() % 3;
    let base_length = input.len() - extra_length;

    let mut start = 0;
    while start < base_length {
        let o1 = input[start];
        let o2 = input[start + 1];
        let o3 = input[start + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
        dest[offset + 2..offset + 4].copy_from_slice(&TABLE2[v2]);
        offset += 4;
        start += 3;
    }

    if extra_length == 1 {
        let o1 = input[base_length];
        dest[offset..offset + 2].copy_from_slice(&TABLE2[(o1 as usize) << 4]);
        dest[offset + 2] = PAD_BYTE;
        dest[offset + 3] = PAD_BYTE;
        offset += 4;
    } else if extra_length == 2 {
        let o1 = input[base_length];
        let o2 = input[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;

        dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
        dest[offset + 2] = ALPHABET_BYTES[v2];
        dest[offset + 3] = PAD_BYTE;
        offset += 4;
    }

    offset
}
