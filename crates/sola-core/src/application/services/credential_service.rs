//! Credential Resolver - ordered lookup of the API key.
//!
//! Sources are consulted in registration order; the CLI registers
//! environment, config file, then the interactive prompt. The first source
//! that produces a key wins. A key obtained interactively is written to the
//! durable store so the prompt is never shown twice.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CredentialSource, CredentialStore},
    },
    domain::Credential,
    error::SolaResult,
};

/// Resolves and persists the API key.
pub struct CredentialResolver {
    sources: Vec<Box<dyn CredentialSource>>,
    store: Box<dyn CredentialStore>,
}

impl CredentialResolver {
    /// Create a resolver with no sources; add them with [`Self::with_source`].
    pub fn new(store: Box<dyn CredentialStore>) -> Self {
        Self {
            sources: Vec::new(),
            store,
        }
    }

    /// Append a source. Earlier sources take precedence.
    pub fn with_source(mut self, source: Box<dyn CredentialSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Return the first available key.
    ///
    /// Fails with `CredentialUnavailable` when every source comes up empty.
    #[instrument(skip_all)]
    pub fn resolve(&self) -> SolaResult<Credential> {
        for source in &self.sources {
            match source.try_get()? {
                Some(credential) => {
                    debug!(source = source.name(), "API key resolved");
                    if source.is_interactive() {
                        self.store.save(&credential)?;
                        info!(path = %self.store.location().display(), "API key saved");
                    }
                    return Ok(credential);
                }
                None => debug!(source = source.name(), "no API key here"),
            }
        }

        Err(ApplicationError::CredentialUnavailable {
            checked: self.sources.iter().map(|s| s.name()).collect(),
        }
        .into())
    }

    /// Unconditionally overwrite the stored key.
    #[instrument(skip_all)]
    pub fn store(&self, raw: &str) -> SolaResult<Credential> {
        let credential = Credential::new(raw)?;
        self.store.save(&credential)?;
        info!(path = %self.store.location().display(), "API key saved");
        Ok(credential)
    }

    /// Where [`Self::store`] writes.
    pub fn location(&self) -> &Path {
        self.store.location()
    }
}
