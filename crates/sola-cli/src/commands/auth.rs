//! `sola auth`: store the API key.

use tracing::instrument;

use crate::{
    cli::AuthArgs,
    commands::credential_resolver,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::prompt_secret,
};

#[instrument(skip_all)]
pub fn execute(args: AuthArgs, output: OutputManager) -> CliResult<()> {
    let raw = match args.api_key {
        Some(key) => key,
        None => prompt_secret("Enter your OpenAI API key")?.ok_or(
            CliError::FeatureNotAvailable {
                feature: "interactive key prompt",
            },
        )?,
    };

    let resolver = credential_resolver()?;
    resolver.store(&raw)?;

    output.success(&format!(
        "API key saved to {}",
        resolver.location().display()
    ))?;
    Ok(())
}
