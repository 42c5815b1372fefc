//! The API credential value object.

use std::fmt;

use crate::domain::DomainError;

/// Name of the environment variable and of the key written to the config file.
pub const CREDENTIAL_KEY: &str = "OPENAI_API_KEY";

/// An API key, normalised on construction.
///
/// Normalisation trims surrounding whitespace and then strips surrounding
/// `"` and `'` characters, so `  "abc" ` and `'abc'` both become `abc`.
/// `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Build a credential from raw user or environment input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let value = normalise(raw.as_ref());
        if value.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self(value.to_owned()))
    }

    /// Parse the content of the credential config file.
    ///
    /// The value is whatever follows the last `=` of the trimmed content
    /// (the whole content when there is no `=`). Returns `None` when nothing
    /// usable is left.
    pub fn from_config_content(content: &str) -> Option<Self> {
        let content = content.trim();
        let raw = content.rsplit('=').next().unwrap_or(content);
        Self::new(raw).ok()
    }

    /// The single line persisted to the config file.
    pub fn to_config_line(&self) -> String {
        format!("{CREDENTIAL_KEY}={}", self.0)
    }

    /// Borrow the secret. Only the HTTP adapter should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

fn normalise(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim_matches('\'')
}
