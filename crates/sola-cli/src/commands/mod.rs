//! Command handlers.
//!
//! Each handler marshals arguments, wires adapters into a core service and
//! reports the result. Business logic lives in `sola-core`.

pub mod auth;
pub mod build;
pub mod completions;
pub mod config;
pub mod init;

use sola_adapters::{ConfigFileCredentials, EnvCredentialSource};
use sola_core::application::CredentialResolver;

use crate::{
    error::{CliError, CliResult},
    prompt::PromptCredentialSource,
};

/// `~/.sola_config`.
pub(crate) fn key_file() -> CliResult<ConfigFileCredentials> {
    dirs::home_dir()
        .map(ConfigFileCredentials::in_home)
        .ok_or_else(|| CliError::ConfigError {
            message: "Cannot determine the home directory for the API key file".into(),
            source: None,
        })
}

/// Environment, then key file, then the interactive prompt.
pub(crate) fn credential_resolver() -> CliResult<CredentialResolver> {
    let file = key_file()?;
    Ok(CredentialResolver::new(Box::new(file.clone()))
        .with_source(Box::new(EnvCredentialSource::new()))
        .with_source(Box::new(file))
        .with_source(Box::new(PromptCredentialSource::default())))
}
