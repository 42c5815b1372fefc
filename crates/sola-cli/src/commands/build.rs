//! `sola build`: generate business logic into `app/services.py`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use indicatif::ProgressBar;
use tracing::instrument;

use sola_adapters::{LocalFilesystem, OpenAiClient, builtin_standards};
use sola_core::{
    application::{GenerateService, GenerationSettings, StandardsSource, ports::CompletionClient},
    domain::{CompletionRequest, Credential},
    error::SolaResult,
};

use crate::{
    cli::BuildArgs,
    commands::credential_resolver,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Shows a spinner for the duration of each remote call.
struct SpinnerClient {
    inner: Box<dyn CompletionClient>,
    spinner: ProgressBar,
    message: &'static str,
}

#[async_trait]
impl CompletionClient for SpinnerClient {
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> SolaResult<String> {
        self.spinner.set_message(self.message);
        self.spinner.enable_steady_tick(Duration::from_millis(80));
        let result = self.inner.complete(credential, request).await;
        self.spinner.finish_and_clear();
        result
    }
}

#[instrument(skip_all)]
pub fn execute(args: BuildArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project_dir: PathBuf = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().with_cli_context(|| "Cannot read the current directory")?,
    };

    let client = SpinnerClient {
        inner: Box::new(OpenAiClient::new(&config.generation.base_url)),
        spinner: output.spinner(),
        message: "Generating business logic...",
    };

    let service = GenerateService::new(
        Arc::new(LocalFilesystem::new()),
        Box::new(client),
        credential_resolver()?,
        GenerationSettings {
            model: config.generation.model.clone(),
            temperature: config.generation.temperature,
            standards: match &config.paths.specs_dir {
                Some(dir) => StandardsSource::Directory(dir.clone()),
                None => StandardsSource::Inline(builtin_standards()),
            },
        },
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::IoError {
            message: "Failed to start the async runtime".into(),
            source: e,
        })?;

    output.header(&format!("Building: {}", args.task.trim()))?;
    let path = runtime.block_on(service.generate(&args.task, &project_dir))?;

    output.success(&format!("Logic generated at {}", path.display()))?;
    Ok(())
}
