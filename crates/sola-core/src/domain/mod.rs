//! Core domain layer for Sola.
//!
//! Pure logic, no I/O:
//!
//! - **credential**: the API key value object and its config-file line format
//! - **render_context**: `{{ placeholder }}` substitution
//! - **layout**: the fixed project skeleton
//! - **prompt**: standards block, prompts, completion request, fence stripping
//!
// Public API - what the world sees
pub mod credential;
pub mod error;
pub mod layout;
pub mod prompt;
pub mod render_context;

mod validation;

pub use credential::{CREDENTIAL_KEY, Credential};
pub use error::DomainError;
pub use layout::{PACKAGE_MARKER, ProjectLayout, RelativePath, TemplateMapping};
pub use prompt::{
    ARCHITECTURE_SPEC, ChatMessage, CompletionRequest, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    ENGINEERING_SPEC, Role, Standards, strip_code_fences, user_prompt,
};
pub use render_context::RenderContext;
pub use validation::DomainValidator;
