//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sola-adapters` crate provides implementations; the interactive
//! credential prompt lives in `sola-cli`.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::{CompletionRequest, Credential};
use crate::error::SolaResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sola_adapters::filesystem::LocalFilesystem` (production)
/// - `sola_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing ones are fine.
    fn create_dir_all(&self, path: &Path) -> SolaResult<()>;

    /// Replace the whole content of a file.
    fn write_file(&self, path: &Path, content: &str) -> SolaResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> SolaResult<String>;

    /// Create an empty file unless one already exists.
    ///
    /// Returns `true` if the file was created. Existing content is untouched.
    fn touch(&self, path: &Path) -> SolaResult<bool>;
}

/// Port for named template lookup.
///
/// Implemented by:
/// - `sola_adapters::template_store::DirectoryStore` (template directory)
/// - `sola_adapters::template_store::InMemoryStore` (testing)
pub trait TemplateStore: Send + Sync {
    /// Raw content of a template.
    ///
    /// Fails with `ApplicationError::TemplateMissing` when the name is unknown.
    fn load(&self, name: &str) -> SolaResult<String>;

    /// Names of all available templates, sorted.
    fn list(&self) -> SolaResult<Vec<String>>;
}

/// One place an API key may come from.
///
/// Sources are consulted in order by `CredentialResolver`; the first one
/// returning `Some` wins.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialSource: Send + Sync {
    /// Short name for logs and error messages ("environment", "config file").
    fn name(&self) -> &'static str;

    /// `Ok(None)` means "not available here", not an error.
    fn try_get(&self) -> SolaResult<Option<Credential>>;

    /// Interactive results are persisted to the durable store.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Durable home of the API key.
pub trait CredentialStore: Send + Sync {
    /// Overwrite the stored key.
    fn save(&self, credential: &Credential) -> SolaResult<()>;

    /// Where the key lives, for user messages.
    fn location(&self) -> &Path;
}

/// Port for the remote chat-completion call.
///
/// Implemented by `sola_adapters::completion::OpenAiClient`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the exchange and return the first choice's message content.
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> SolaResult<String>;
}
