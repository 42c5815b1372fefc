//! Template store backed by a directory of template files.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use sola_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::SolaResult,
};

use crate::filesystem::map_io_error;

/// Reads `<root>/<name>` on every load; nothing is cached.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirectoryStore {
    fn load(&self, name: &str) -> SolaResult<String> {
        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "Template loaded");
                Ok(content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ApplicationError::TemplateMissing { name: name.into() }.into())
            }
            Err(e) => Err(map_io_error(&path, e, "read template")),
        }
    }

    fn list(&self) -> SolaResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(&self.root, e, "list templates")),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(&self.root, e, "list templates"))?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
