//! The `~/.sola_config` key file: a single `OPENAI_API_KEY=<value>` line.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use sola_core::{
    application::ports::{CredentialSource, CredentialStore},
    domain::Credential,
    error::SolaResult,
};

use crate::filesystem::{map_io_error, write_atomic};

/// File name of the key file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".sola_config";

/// Owner read/write only.
#[cfg(unix)]
const KEY_FILE_MODE: Option<u32> = Some(0o600);
#[cfg(not(unix))]
const KEY_FILE_MODE: Option<u32> = None;

/// Key file acting as both a credential source and the durable store.
#[derive(Debug, Clone)]
pub struct ConfigFileCredentials {
    path: PathBuf,
}

impl ConfigFileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<home>/.sola_config`.
    pub fn in_home(home: impl AsRef<Path>) -> Self {
        Self::new(home.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialSource for ConfigFileCredentials {
    fn name(&self) -> &'static str {
        "config file"
    }

    fn try_get(&self) -> SolaResult<Option<Credential>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let credential = Credential::from_config_content(&content);
                trace!(path = %self.path.display(), found = credential.is_some(), "read key file");
                Ok(credential)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(&self.path, e, "read key file")),
        }
    }
}

impl CredentialStore for ConfigFileCredentials {
    fn save(&self, credential: &Credential) -> SolaResult<()> {
        let line = format!("{}\n", credential.to_config_line());
        write_atomic(&self.path, &line, KEY_FILE_MODE)?;
        debug!(path = %self.path.display(), "key file written");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn quoted_value_is_unquoted() {
        let home = TempDir::new().unwrap();
        std::fs::write(home.path().join(CONFIG_FILE_NAME), "OPENAI_API_KEY=\"abc\"\n").unwrap();

        let got = ConfigFileCredentials::in_home(home.path()).try_get().unwrap();
        assert_eq!(got.unwrap().expose(), "abc");
    }

    #[test]
    fn missing_or_empty_file_is_absent() {
        let home = TempDir::new().unwrap();
        let creds = ConfigFileCredentials::in_home(home.path());
        assert!(creds.try_get().unwrap().is_none());

        std::fs::write(creds.path(), "OPENAI_API_KEY=\n").unwrap();
        assert!(creds.try_get().unwrap().is_none());
    }

    #[test]
    fn save_overwrites_with_single_line() {
        let home = TempDir::new().unwrap();
        let creds = ConfigFileCredentials::in_home(home.path());

        creds.save(&Credential::new("first").unwrap()).unwrap();
        creds.save(&Credential::new(" second ").unwrap()).unwrap();

        assert_eq!(
            std::fs::read_to_string(creds.location()).unwrap(),
            "OPENAI_API_KEY=second\n"
        );
        assert_eq!(creds.try_get().unwrap().unwrap().expose(), "second");
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let home = TempDir::new().unwrap();
        let creds = ConfigFileCredentials::in_home(home.path());
        creds.save(&Credential::new("k").unwrap()).unwrap();

        let mode = std::fs::metadata(creds.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
