// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input validation
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Task description cannot be empty")]
    EmptyTask,

    #[error("API key cannot be empty")]
    EmptyCredential,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("Undefined placeholder '{{{{ {name} }}}}'")]
    UnresolvedPlaceholder { name: String },

    #[error("Unterminated placeholder starting at byte {offset}")]
    UnterminatedPlaceholder { offset: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Names cannot start with '.' or contain path separators".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::EmptyTask => vec![
                "Describe the logic to generate, e.g.:".into(),
                "  sola build --task \"invoice parser with validation\"".into(),
            ],
            Self::EmptyCredential => vec![
                "Paste the full key when prompted".into(),
                "Or pass it directly: sola auth --api-key <KEY>".into(),
            ],
            Self::UnresolvedPlaceholder { name } => vec![
                format!("The template references '{name}', which Sola does not provide"),
                "Available values: project_name, project_name_snake, project_name_kebab, \
                 project_name_pascal, year"
                    .into(),
            ],
            Self::UnterminatedPlaceholder { .. } => {
                vec!["Close every '{{' in the template with '}}'".into()]
            }
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Layout entries must be relative to the project root".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::EmptyTask
            | Self::EmptyCredential
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::InvalidInput,
            Self::UnresolvedPlaceholder { .. } | Self::UnterminatedPlaceholder { .. } => {
                ErrorCategory::Rendering
            }
        }
    }
}
