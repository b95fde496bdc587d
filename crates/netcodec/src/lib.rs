//! netcodec — Base64 and URL percent-encoding codecs.
//!
//! The four core operations are pure functions over byte sequences:
//!
//! | Operation | Result |
//! |---|---|
//! | [`base64_encode`] | padded RFC 4648 text, never fails |
//! | [`base64_decode`] | bytes, or [`Base64Error`] for anything outside the alphabet |
//! | [`url_encode`] | `%XX`-escaped text, never fails |
//! | [`url_decode`] | bytes, malformed escapes passed through |
//!
//! [`Codec`] bundles the same operations behind a [`CodecConfig`] for callers
//! that need extra URL safe marks or strict escape handling. The leaf crates
//! are re-exported as [`base64`] and [`url`].
//!
//! # Example
//!
//! ```
//! let token = netcodec::base64_encode("user:password");
//! assert_eq!(token, "dXNlcjpwYXNzd29yZA==");
//! assert_eq!(netcodec::base64_decode(&token).unwrap(), b"user:password");
//!
//! let query = netcodec::url_encode("a value with spaces");
//! assert_eq!(query, "a%20value%20with%20spaces");
//! assert_eq!(netcodec::url_decode("a+value+with%20spaces"), b"a value with spaces");
//! ```

pub use netcodec_base64 as base64;
pub use netcodec_url as url;

pub use netcodec_base64::Base64Error;
pub use netcodec_url::{MalformedEscapePolicy, UrlError};

pub mod cli;
mod codec;
mod config;

pub use codec::Codec;
pub use config::CodecConfig;

/// Encodes bytes as standard, padded base64.
pub fn base64_encode(input: impl AsRef<[u8]>) -> String {
    base64::to_base64(input.as_ref())
}

/// Decodes standard, padded base64, rejecting any byte outside the alphabet.
pub fn base64_decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Base64Error> {
    base64::from_base64_bin(input.as_ref())
}

/// Percent-encodes bytes with the unreserved character set.
pub fn url_encode(input: impl AsRef<[u8]>) -> String {
    url::url_encode(input)
}

/// Decodes `%XX` escapes and `+` spaces; malformed escapes pass through.
pub fn url_decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    url::url_decode(input)
}

/// Errors from configured codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error(transparent)]
    Base64(#[from] Base64Error),
    #[error(transparent)]
    Url(#[from] UrlError),
    #[error("invalid codec configuration: {0}")]
    Config(#[from] toml::de::Error),
}
