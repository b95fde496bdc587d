/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';

/// Marks bytes outside the alphabet in [`DECODE_TABLE`].
pub(crate) const INVALID: u8 = 0xFF;

/// Reverse lookup from byte value to sextet, [`INVALID`] for everything else
/// (padding included).
pub(crate) static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Two-character lookup table for encoding. Entry `i * 64 + j` holds the
/// characters for sextets `i` and `j`, so one 12-bit index yields two
/// output characters.
pub(crate) static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Length of the padded encoding of `length` input bytes: `4 * ceil(length / 3)`.
///
/// ```
/// use netcodec_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Upper bound on the decoded size of `length` encoded bytes.
///
/// Exact for unpadded input; padded input decodes to one or two bytes fewer.
pub const fn decoded_len_estimate(length: usize) -> usize {
    length / 4 * 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_table_inverts_alphabet() {
        for (i, &c) in ALPHABET_BYTES.iter().enumerate() {
            assert_eq!(DECODE_TABLE[c as usize], i as u8);
        }
        assert_eq!(DECODE_TABLE[PAD_BYTE as usize], INVALID);
        assert_eq!(DECODE_TABLE[b' ' as usize], INVALID);
        assert_eq!(DECODE_TABLE[0x80], INVALID);
    }

    #[test]
    fn alphabet_views_agree() {
        assert_eq!(ALPHABET.as_bytes(), ALPHABET_BYTES);
    }
}
