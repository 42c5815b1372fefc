//! In-memory template store for tests and embedding.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use sola_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::SolaResult,
};

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template.
    pub fn insert(&self, name: impl Into<String>, content: impl Into<String>) -> SolaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), content.into());
        Ok(())
    }

    /// Builder-style [`Self::insert`].
    pub fn with_template(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(name.into(), content.into());
        }
        self
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn load(&self, name: &str) -> SolaResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(name)
            .cloned()
            .ok_or_else(|| ApplicationError::TemplateMissing { name: name.into() }.into())
    }

    fn list(&self) -> SolaResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_load_and_list() {
        let store = InMemoryStore::new().with_template("b.j2", "B");
        store.insert("a.j2", "A").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.load("a.j2").unwrap(), "A");
        assert_eq!(store.list().unwrap(), ["a.j2", "b.j2"]);
        assert!(store.load("c.j2").unwrap_err().is_template_missing());
    }
}
