//! URL percent-encoding utilities.
//!
//! This crate provides:
//! - Percent-encoding of arbitrary bytes with the unreserved set
//!   (`A-Z a-z 0-9 - _ . ~`), optionally widened with extra marks
//! - Decoding of `%XX` escapes and the `+`-for-space form convention, with a
//!   permissive or strict policy for malformed escapes
//!
//! Decoding inverts encoding: `url_decode(url_encode(s)) == s` for every
//! byte string. The reverse does not hold, because a literal `+` decodes to
//! a space and is then re-encoded as `%20`.
//!
//! # Example
//!
//! ```
//! use netcodec_url::{url_decode, url_encode};
//!
//! let encoded = url_encode("q=rust codecs");
//! assert_eq!(encoded, "q%3Drust%20codecs");
//! assert_eq!(url_decode(&encoded), b"q=rust codecs");
//! ```

mod constants;
mod url_decode;
mod url_encode;
mod url_encoder;

pub use constants::{ESCAPE, PLUS, UNRESERVED_MARKS};
pub use url_decode::{url_decode, url_decode_to_string, url_decode_with, MalformedEscapePolicy};
pub use url_encode::url_encode;
pub use url_encoder::{create_url_encoder, UrlEncoder};

/// Error type for URL codec operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// A `%` is not followed by two hex digits (strict decoding only).
    #[error("malformed percent escape at position {position}")]
    MalformedPercentSequence { position: usize },
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded URL component is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// A configured safe mark cannot pass through the encoder.
    #[error("{mark:?} cannot be configured as a safe URL mark")]
    InvalidSafeMark { mark: char },
}
