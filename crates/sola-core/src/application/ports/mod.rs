//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sola-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Named template lookup
//!   - `CredentialSource` / `CredentialStore`: API key lookup and persistence
//!   - `CompletionClient`: Remote chat completion
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CompletionClient, CredentialSource, CredentialStore, Filesystem, TemplateStore};

#[cfg(test)]
pub use output::{MockCompletionClient, MockCredentialSource, MockFilesystem};
