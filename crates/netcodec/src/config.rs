use serde::{Deserialize, Serialize};

use crate::{CodecError, MalformedEscapePolicy};

/// Construction-time configuration for a [`Codec`](crate::Codec).
///
/// Every field has a default, so an empty TOML document yields the same
/// behavior as the free functions.
///
/// ```
/// use netcodec::{CodecConfig, MalformedEscapePolicy};
///
/// let config = CodecConfig::from_toml_str(
///     r#"
///     url-safe-marks = "/:"
///     malformed-escape = "reject"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.url_safe_marks, "/:");
/// assert_eq!(config.malformed_escape, MalformedEscapePolicy::Reject);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CodecConfig {
    /// ASCII marks the URL encoder passes through besides the unreserved set.
    pub url_safe_marks: String,
    /// Handling of `%` not followed by two hex digits when URL-decoding.
    pub malformed_escape: MalformedEscapePolicy,
}

impl CodecConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CodecError> {
        Ok(toml::from_str(text)?)
    }

    /// Renders the configuration as TOML text.
    pub fn to_toml_string(&self) -> String {
        // Both fields serialize as plain strings.
        toml::to_string(self).unwrap_or_default()
    }
}
