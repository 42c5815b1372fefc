//! Infrastructure adapters for Sola.
//!
//! This crate implements the ports defined in `sola-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin;
pub mod completion;
pub mod credentials;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use builtin::{builtin_standards, builtin_store};
pub use completion::OpenAiClient;
pub use credentials::{ConfigFileCredentials, EnvCredentialSource};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{DirectoryStore, InMemoryStore};
