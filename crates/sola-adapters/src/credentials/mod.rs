//! Credential sources and the durable key store.
//!
//! Resolution order is decided by the caller; `sola-cli` registers
//! [`EnvCredentialSource`], then [`ConfigFileCredentials`], then its
//! interactive prompt.

mod config_file;
mod env;

pub use config_file::{CONFIG_FILE_NAME, ConfigFileCredentials};
pub use env::EnvCredentialSource;
