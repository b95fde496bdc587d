//! Percent-encoding with the unreserved character set.

use crate::constants::{ESCAPE, HEX_UPPER, UNRESERVED};

/// Percent-encodes bytes so they are safe to place in a URL.
///
/// ASCII letters, digits and `-` `_` `.` `~` pass through; every other byte,
/// space included, becomes `%XX` with uppercase hex digits. Never fails.
///
/// # Example
///
/// ```
/// use netcodec_url::url_encode;
///
/// assert_eq!(url_encode("a value with spaces"), "a%20value%20with%20spaces");
/// assert_eq!(url_encode("1+1=2"), "1%2B1%3D2");
/// assert_eq!(url_encode([0xFFu8, 0x00]), "%FF%00");
/// ```
pub fn url_encode(input: impl AsRef<[u8]>) -> String {
    encode_with(input.as_ref(), &UNRESERVED)
}

pub(crate) fn encode_with(input: &[u8], safe: &[bool; 256]) -> String {
    let escaped = input.iter().filter(|&&b| !safe[b as usize]).count();
    let mut out = String::with_capacity(input.len() + escaped * 2);

    for &byte in input {
        if safe[byte as usize] {
            out.push(byte as char);
        } else {
            out.push(ESCAPE as char);
            out.push(HEX_UPPER[(byte >> 4) as usize] as char);
            out.push(HEX_UPPER[(byte & 0x0f) as usize] as char);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(url_encode(""), "");
    }

    #[test]
    fn test_reserved_marks() {
        assert_eq!(url_encode("/?#[]@"), "%2F%3F%23%5B%5D%40");
        assert_eq!(url_encode("!$&'()*,;="), "%21%24%26%27%28%29%2A%2C%3B%3D");
        assert_eq!(url_encode("%+"), "%25%2B");
    }

    #[test]
    fn test_unreserved_untouched() {
        let unreserved = "ABCXYZabcxyz0189-_.~";
        assert_eq!(url_encode(unreserved), unreserved);
    }

    #[test]
    fn test_utf8_bytes() {
        assert_eq!(url_encode("é"), "%C3%A9");
        assert_eq!(url_encode("日"), "%E6%97%A5");
    }

    #[test]
    fn test_control_bytes() {
        assert_eq!(url_encode("\n\t\u{7f}"), "%0A%09%7F");
    }
}
