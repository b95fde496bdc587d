use netcodec_url::{url_decode_with, MalformedEscapePolicy, UrlEncoder};

use crate::{CodecConfig, CodecError};

/// The four codec operations bound to a validated [`CodecConfig`].
///
/// `Codec::default()` behaves exactly like the crate-level free functions.
///
/// ```
/// use netcodec::{Codec, CodecConfig, MalformedEscapePolicy};
///
/// let codec = Codec::new(CodecConfig {
///     url_safe_marks: "/".to_string(),
///     malformed_escape: MalformedEscapePolicy::Reject,
/// })
/// .unwrap();
/// assert_eq!(codec.url_encode("/a b"), "/a%20b");
/// assert!(codec.url_decode("100%").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codec {
    url_encoder: UrlEncoder,
    malformed_escape: MalformedEscapePolicy,
}

impl Codec {
    /// Builds a codec, validating the configured safe marks.
    pub fn new(config: CodecConfig) -> Result<Self, CodecError> {
        let url_encoder = UrlEncoder::new(&config.url_safe_marks)?;
        tracing::debug!(
            safe_marks = %config.url_safe_marks,
            malformed_escape = ?config.malformed_escape,
            "codec configured"
        );
        Ok(Self {
            url_encoder,
            malformed_escape: config.malformed_escape,
        })
    }

    /// The configuration this codec was built from.
    pub fn config(&self) -> CodecConfig {
        CodecConfig {
            url_safe_marks: self.url_encoder.extra_safe().to_owned(),
            malformed_escape: self.malformed_escape,
        }
    }

    pub fn base64_encode(&self, input: impl AsRef<[u8]>) -> String {
        crate::base64_encode(input)
    }

    pub fn base64_decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
        Ok(crate::base64_decode(input)?)
    }

    pub fn url_encode(&self, input: impl AsRef<[u8]>) -> String {
        self.url_encoder.encode(input)
    }

    pub fn url_decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
        Ok(url_decode_with(input, self.malformed_escape)?)
    }
}
