//! Application layer for Sola.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CredentialResolver, ScaffoldService,
//!   GenerateService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CredentialResolver, GenerateService, GenerationSettings, ScaffoldReport, ScaffoldService,
    StandardsSource, TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CompletionClient, CredentialSource, CredentialStore, Filesystem, TemplateStore};

pub use error::ApplicationError;
