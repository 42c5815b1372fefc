//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use sola_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SolaError, SolaResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SolaResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SolaResult<()> {
        write_atomic(path, content, None)
    }

    fn read_file(&self, path: &Path) -> SolaResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn touch(&self, path: &Path) -> SolaResult<bool> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(map_io_error(path, e, "create file")),
        }
    }
}

/// Replace `path` with `content` via a temp file in the same directory.
///
/// Readers see either the old or the new content, never a torn write. With
/// `mode` set (Unix only) the file gets exactly those permission bits.
/// Otherwise an existing file keeps its permissions and a new one gets the
/// umask default, as with `std::fs::write`.
pub fn write_atomic(path: &Path, content: &str, mode: Option<u32>) -> SolaResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Passed to open(2), so the umask still applies.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| map_io_error(path, e, "write file"))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| map_io_error(path, e, "write file"))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let target = match mode {
            Some(mode) => Some(std::fs::Permissions::from_mode(mode)),
            None => std::fs::metadata(path).ok().map(|meta| meta.permissions()),
        };
        if let Some(permissions) = target {
            std::fs::set_permissions(tmp.path(), permissions)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
    }
    #[cfg(not(unix))]
    let _ = mode;

    tmp.persist(path)
        .map_err(|e| map_io_error(path, e.error, "write file"))?;
    Ok(())
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> SolaError {
    ApplicationError::FilesystemFailure {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
