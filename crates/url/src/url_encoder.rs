//! Encoder configured with additional pass-through marks.

use crate::constants::{safe_table, ESCAPE, PLUS, UNRESERVED_MARKS};
use crate::url_encode::encode_with;
use crate::UrlError;

/// A percent-encoder whose safe set is the unreserved characters plus a
/// configured list of extra ASCII marks.
#[derive(Clone, PartialEq, Eq)]
pub struct UrlEncoder {
    safe: [bool; 256],
    extra_safe: String,
}

impl UrlEncoder {
    /// Builds an encoder that also passes `extra_safe` through unescaped.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidSafeMark`] for a mark that is not printable
    /// ASCII, or that is `%` or `+`, since the decoder would no longer
    /// invert the encoding.
    pub fn new(extra_safe: &str) -> Result<Self, UrlError> {
        let mut safe = safe_table(UNRESERVED_MARKS.as_bytes());
        for mark in extra_safe.chars() {
            if !mark.is_ascii_graphic() || mark == ESCAPE as char || mark == PLUS as char {
                return Err(UrlError::InvalidSafeMark { mark });
            }
            safe[mark as usize] = true;
        }
        Ok(Self {
            safe,
            extra_safe: extra_safe.to_owned(),
        })
    }

    /// The extra marks this encoder passes through.
    pub fn extra_safe(&self) -> &str {
        &self.extra_safe
    }

    /// Percent-encodes `input` with this encoder's safe set.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        encode_with(input.as_ref(), &self.safe)
    }
}

impl Default for UrlEncoder {
    fn default() -> Self {
        Self {
            safe: safe_table(UNRESERVED_MARKS.as_bytes()),
            extra_safe: String::new(),
        }
    }
}

impl std::fmt::Debug for UrlEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlEncoder")
            .field("extra_safe", &self.extra_safe)
            .finish()
    }
}

/// Creates a URL encoder function that passes `extra_safe` marks through in
/// addition to the unreserved set.
///
/// # Errors
///
/// Returns [`UrlError::InvalidSafeMark`] if a mark is rejected by
/// [`UrlEncoder::new`].
///
/// # Example
///
/// ```
/// use netcodec_url::create_url_encoder;
///
/// let encode_path = create_url_encoder(Some("/")).unwrap();
/// assert_eq!(encode_path(b"/a b/c"), "/a%20b/c");
///
/// assert!(create_url_encoder(Some("%")).is_err());
/// ```
pub fn create_url_encoder(extra_safe: Option<&str>) -> Result<impl Fn(&[u8]) -> String, UrlError> {
    let encoder = UrlEncoder::new(extra_safe.unwrap_or(""))?;
    Ok(move |input: &[u8]| encoder.encode(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_url_encode() {
        let input = "a b/c?d=e&f~g";
        assert_eq!(
            UrlEncoder::default().encode(input),
            crate::url_encode(input)
        );
        assert_eq!(UrlEncoder::default(), UrlEncoder::new("").unwrap());
    }

    #[test]
    fn test_rejected_marks() {
        assert_eq!(
            UrlEncoder::new("/%").unwrap_err(),
            UrlError::InvalidSafeMark { mark: '%' }
        );
        assert_eq!(
            UrlEncoder::new("+").unwrap_err(),
            UrlError::InvalidSafeMark { mark: '+' }
        );
        assert_eq!(
            UrlEncoder::new(" ").unwrap_err(),
            UrlError::InvalidSafeMark { mark: ' ' }
        );
        assert_eq!(
            UrlEncoder::new("é").unwrap_err(),
            UrlError::InvalidSafeMark { mark: 'é' }
        );
    }

    #[test]
    fn test_legacy_marks() {
        let encoder = UrlEncoder::new("!*'()").unwrap();
        assert_eq!(encoder.encode("(it's)*!~"), "(it's)*!~");
        assert_eq!(encoder.extra_safe(), "!*'()");
    }
}
