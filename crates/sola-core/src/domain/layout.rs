//! The fixed skeleton of a forged project.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::DomainError;

/// Empty marker created in every non-hidden directory so Python treats it as
/// an importable package.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// A filesystem path guaranteed to be **relative**.
///
/// Layout entries are joined onto the project root; an absolute entry would
/// escape it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Try to create a relative path.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// `true` if any component is a dot-directory (e.g. `.github/workflows`).
    pub fn is_hidden(&self) -> bool {
        self.0.components().any(|c| match c {
            Component::Normal(name) => name.to_string_lossy().starts_with('.'),
            _ => false,
        })
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// One template rendered into the skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMapping {
    /// File name inside the template directory.
    pub template: String,
    /// Output path relative to the project root.
    pub output: RelativePath,
}

/// Directories and template outputs that make up a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    directories: Vec<RelativePath>,
    files: Vec<TemplateMapping>,
}

impl ProjectLayout {
    /// Build a layout from raw entries.
    pub fn new<D, F>(directories: D, files: F) -> Result<Self, DomainError>
    where
        D: IntoIterator<Item = &'static str>,
        F: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let directories = directories
            .into_iter()
            .map(RelativePath::try_new)
            .collect::<Result<Vec<_>, _>>()?;
        let files = files
            .into_iter()
            .map(|(template, output)| {
                Ok(TemplateMapping {
                    template: template.to_string(),
                    output: RelativePath::try_new(output)?,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self { directories, files })
    }

    /// The SOLA service skeleton: feature folders, eval tests, CI workflows,
    /// plus the build, container and entry-point files.
    pub fn standard() -> Self {
        Self {
            directories: [
                "app/features/health",
                "app/shared",
                "test/evals",
                ".github/workflows",
            ]
            .into_iter()
            .map(|d| RelativePath(PathBuf::from(d)))
            .collect(),
            files: [
                ("Makefile.j2", "Makefile"),
                ("README.md.j2", "README.md"),
                ("pyproject.toml.j2", "pyproject.toml"),
                ("main.py.j2", "app/main.py"),
                ("health_router.py.j2", "app/features/health/router.py"),
                ("Dockerfile.j2", "Dockerfile"),
                ("docker-compose.yml.j2", "docker-compose.yml"),
            ]
            .into_iter()
            .map(|(template, output)| TemplateMapping {
                template: template.to_string(),
                output: RelativePath(PathBuf::from(output)),
            })
            .collect(),
        }
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn files(&self) -> &[TemplateMapping] {
        &self.files
    }

    /// Directories that receive a [`PACKAGE_MARKER`].
    pub fn package_directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.directories.iter().filter(|d| !d.is_hidden())
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::standard()
    }
}
