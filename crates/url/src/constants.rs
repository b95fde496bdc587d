/// Marks that pass through the encoder in addition to ASCII letters and digits.
pub const UNRESERVED_MARKS: &str = "-_.~";

/// Escape introducer.
pub const ESCAPE: u8 = b'%';

/// Form-encoding stand-in for a space, accepted by the decoder only.
pub const PLUS: u8 = b'+';

/// Uppercase hexadecimal digits used in `%XX` escapes.
pub(crate) const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Pass-through table of the default encoder, indexed by byte value.
pub(crate) static UNRESERVED: [bool; 256] = safe_table(UNRESERVED_MARKS.as_bytes());

pub(crate) const fn safe_table(marks: &[u8]) -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).is_ascii_alphanumeric();
        i += 1;
    }
    let mut j = 0;
    while j < marks.len() {
        table[marks[j] as usize] = true;
        j += 1;
    }
    table
}

/// Value of an ASCII hex digit, either case.
#[inline]
pub(crate) fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_set() {
        let safe: Vec<u8> = (0..=255u8).filter(|&b| UNRESERVED[b as usize]).collect();
        assert_eq!(safe.len(), 26 + 26 + 10 + 4);
        for mark in UNRESERVED_MARKS.bytes() {
            assert!(UNRESERVED[mark as usize]);
        }
        assert!(!UNRESERVED[b' ' as usize]);
        assert!(!UNRESERVED[ESCAPE as usize]);
        assert!(!UNRESERVED[PLUS as usize]);
    }

    #[test]
    fn hex_digits() {
        assert_eq!(hex_value(b'0'), Some(0));
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'F'), Some(15));
        assert_eq!(hex_value(b'g'), None);
        assert_eq!(hex_value(b'%'), None);
        for (i, &digit) in HEX_UPPER.iter().enumerate() {
            assert_eq!(hex_value(digit), Some(i as u8));
        }
    }
}
