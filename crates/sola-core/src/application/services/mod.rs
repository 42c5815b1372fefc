//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "generate logic".

pub mod credential_service;
pub mod generate_service;
pub mod scaffold_service;
pub mod template_service;

pub use credential_service::CredentialResolver;
pub use generate_service::{GenerateService, GenerationSettings, StandardsSource};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
pub use template_service::TemplateService;
