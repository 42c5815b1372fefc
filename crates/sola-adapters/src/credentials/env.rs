//! Environment variable credential source.

use tracing::trace;

use sola_core::{
    application::ports::CredentialSource,
    domain::{CREDENTIAL_KEY, Credential},
    error::SolaResult,
};

/// Reads the key from a process environment variable.
///
/// Unset and blank both mean "not here".
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    /// Source reading `OPENAI_API_KEY`.
    pub fn new() -> Self {
        Self::with_var(CREDENTIAL_KEY)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSource for EnvCredentialSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn try_get(&self) -> SolaResult<Option<Credential>> {
        let value = std::env::var(&self.var).ok();
        trace!(var = %self.var, present = value.is_some(), "checked environment");
        Ok(value.and_then(|v| Credential::new(v).ok()))
    }
}
