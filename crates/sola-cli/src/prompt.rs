//! Interactive key entry.
//!
//! Masked input via `dialoguer` when the `interactive` feature is enabled and
//! stdin is a terminal. Otherwise the prompt reports itself as unavailable.

use std::io::{self, IsTerminal};

use tracing::{debug, warn};

use sola_core::{
    application::ports::CredentialSource,
    domain::Credential,
    error::SolaResult,
};

use crate::error::CliResult;

/// Ask for a secret with hidden input.
///
/// `Ok(None)` when no terminal is attached or the build has no interactive
/// support.
pub fn prompt_secret(prompt: &str) -> CliResult<Option<String>> {
    if !io::stdin().is_terminal() {
        debug!("stdin is not a terminal; not prompting");
        return Ok(None);
    }
    read_hidden(prompt)
}

#[cfg(feature = "interactive")]
fn read_hidden(prompt: &str) -> CliResult<Option<String>> {
    use crate::error::CliError;
    use dialoguer::Password;

    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map(Some)
        .map_err(|e| {
            let source: io::Error = e.into();
            if source.kind() == io::ErrorKind::Interrupted {
                CliError::Cancelled
            } else {
                CliError::IoError {
                    message: "Failed to read the API key".into(),
                    source,
                }
            }
        })
}

#[cfg(not(feature = "interactive"))]
fn read_hidden(_prompt: &str) -> CliResult<Option<String>> {
    Ok(None)
}

/// Last-resort credential source: ask the user.
#[derive(Debug, Clone)]
pub struct PromptCredentialSource {
    prompt: String,
}

impl PromptCredentialSource {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for PromptCredentialSource {
    fn default() -> Self {
        Self::new("Enter your OpenAI API key")
    }
}

impl CredentialSource for PromptCredentialSource {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn try_get(&self) -> SolaResult<Option<Credential>> {
        match prompt_secret(&self.prompt) {
            Ok(typed) => Ok(typed.and_then(|raw| Credential::new(raw).ok())),
            Err(e) => {
                warn!(error = %e, "Could not read the API key");
                Ok(None)
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
