//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sola_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SolaResult,
};

/// In-memory filesystem for testing.
///
/// Behaves like a strict disk: writing into a directory that was never
/// created fails.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parents (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// A file's content, if present (testing helper).
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Whether `path` is a known file or directory.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| {
                inner.files.contains_key(path.as_ref()) || inner.directories.contains(path.as_ref())
            })
            .unwrap_or(false)
    }

    /// Whether `path` was created as a directory.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path.as_ref()))
            .unwrap_or(false)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl MemoryFilesystemInner {
    fn require_parent(&self, path: &Path, operation: &'static str) -> SolaResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.directories.contains(parent) {
                return Err(ApplicationError::FilesystemFailure {
                    path: path.to_path_buf(),
                    operation,
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SolaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SolaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.require_parent(path, "write file")?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> SolaResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemFailure {
                path: path.to_path_buf(),
                operation: "read file",
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn touch(&self, path: &Path) -> SolaResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.files.contains_key(path) {
            return Ok(false);
        }
        inner.require_parent(path, "create file")?;
        inner.files.insert(path.to_path_buf(), String::new());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/b.txt"), "x").unwrap();
        assert_eq!(fs.content("a/b.txt").as_deref(), Some("x"));
    }

    #[test]
    fn touch_keeps_existing_content() {
        let fs = MemoryFilesystem::new().with_file("pkg/__init__.py", "VERSION = 1");

        assert!(!fs.touch(Path::new("pkg/__init__.py")).unwrap());
        assert_eq!(fs.content("pkg/__init__.py").as_deref(), Some("VERSION = 1"));
    }

    #[test]
    fn seeded_file_creates_parents() {
        let fs = MemoryFilesystem::new().with_file("specs/ARCHITECTURE.md", "layers");
        assert!(fs.is_dir("specs"));
        assert_eq!(fs.read_file(Path::new("specs/ARCHITECTURE.md")).unwrap(), "layers");
    }
}
