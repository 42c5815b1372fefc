//! Template Service - render one named template to one file.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::RenderContext,
    error::SolaResult,
};

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
    filesystem: Arc<dyn Filesystem>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Load `template_name`, substitute `context`, write to `destination`.
    ///
    /// Missing parent directories are created first. Fails with
    /// `TemplateMissing` when the store has no such template; nothing is
    /// written in that case.
    #[instrument(skip(self, destination, context), fields(destination = %destination.display()))]
    pub fn render(
        &self,
        template_name: &str,
        destination: &Path,
        context: &RenderContext,
    ) -> SolaResult<()> {
        let source = self.store.load(template_name)?;

        let content = context
            .render(&source)
            .map_err(|e| ApplicationError::RenderingFailed {
                template: template_name.to_string(),
                reason: e.to_string(),
            })?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(destination, &content)?;
        debug!(bytes = content.len(), "Template rendered");
        Ok(())
    }

    /// List all templates the store knows.
    pub fn list(&self) -> SolaResult<Vec<String>> {
        self.store.list()
    }
}
