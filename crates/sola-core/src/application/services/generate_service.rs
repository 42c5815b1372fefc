//! Generate Service - turn a task description into `app/services.py`.
//!
//! Workflow:
//! 1. Validate the task
//! 2. Load the two standards documents (specs directory or in memory)
//! 3. Resolve the API key
//! 4. Ask the completion client, strip code fences
//! 5. Write the result, overwriting any previous one
//!
//! Nothing is written unless step 4 succeeds.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{CompletionClient, Filesystem},
        services::CredentialResolver,
    },
    domain::{
        ARCHITECTURE_SPEC, CompletionRequest, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
        DomainValidator as validator, ENGINEERING_SPEC, Standards, strip_code_fences,
    },
    error::SolaResult,
};

/// Directory of the generated file, relative to the project.
const OUTPUT_DIR: &str = "app";
const OUTPUT_FILE: &str = "services.py";

/// Where the standards documents come from.
#[derive(Debug, Clone, PartialEq)]
pub enum StandardsSource {
    /// `ARCHITECTURE.md` and `AI_ENGINEERING.md` inside this directory.
    Directory(PathBuf),
    /// Documents already loaded, e.g. compiled into the binary.
    Inline(Standards),
}

/// Knobs for the completion call and where the standards live.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub standards: StandardsSource,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            standards: StandardsSource::Directory(PathBuf::from("specs")),
        }
    }
}

/// The `build` use case.
pub struct GenerateService {
    filesystem: Arc<dyn Filesystem>,
    client: Box<dyn CompletionClient>,
    credentials: CredentialResolver,
    settings: GenerationSettings,
}

impl GenerateService {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        client: Box<dyn CompletionClient>,
        credentials: CredentialResolver,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            filesystem,
            client,
            credentials,
            settings,
        }
    }

    /// Read both standards documents.
    pub fn load_standards(&self) -> SolaResult<Standards> {
        match &self.settings.standards {
            StandardsSource::Directory(dir) => {
                let architecture = self.filesystem.read_file(&dir.join(ARCHITECTURE_SPEC))?;
                let engineering = self.filesystem.read_file(&dir.join(ENGINEERING_SPEC))?;
                Ok(Standards::new(architecture, engineering))
            }
            StandardsSource::Inline(standards) => Ok(standards.clone()),
        }
    }

    /// Generate business logic for `task` into `<project_dir>/app/services.py`.
    ///
    /// Returns the path written.
    #[instrument(
        skip_all,
        fields(project_dir = %project_dir.as_ref().display(), model = %self.settings.model)
    )]
    pub async fn generate(&self, task: &str, project_dir: impl AsRef<Path>) -> SolaResult<PathBuf> {
        let task = validator::validate_task(task)?;
        let standards = self.load_standards()?;
        let credential = self.credentials.resolve()?;

        let request = CompletionRequest::for_task(
            &self.settings.model,
            self.settings.temperature,
            &standards,
            task,
        );

        let raw = self.client.complete(&credential, &request).await?;
        let code = strip_code_fences(&raw);
        debug!(raw = raw.len(), stripped = code.len(), "Completion received");

        let dir = project_dir.as_ref().join(OUTPUT_DIR);
        self.filesystem.create_dir_all(&dir)?;
        let path = dir.join(OUTPUT_FILE);
        self.filesystem.write_file(&path, &code)?;

        info!(path = %path.display(), "Business logic generated");
        Ok(path)
    }
}
