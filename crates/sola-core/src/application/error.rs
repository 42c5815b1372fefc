//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No credential source produced a key.
    #[error("No API key available (checked: {})", .checked.join(", "))]
    CredentialUnavailable { checked: Vec<&'static str> },

    /// Named template does not exist in the template directory.
    #[error("Template not found: {name}")]
    TemplateMissing { name: String },

    /// Template content could not be rendered.
    #[error("Failed to render template '{template}': {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Failed to {operation} at {path}: {reason}")]
    FilesystemFailure {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// Completion endpoint unreachable, rejected the call, or sent an
    /// unusable response.
    #[error("Remote completion failed: {reason}")]
    RemoteCallFailure {
        reason: String,
        status: Option<u16>,
    },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CredentialUnavailable { .. } => vec![
                "Store a key once: sola auth".into(),
                "Or export OPENAI_API_KEY for this shell".into(),
            ],
            Self::TemplateMissing { name } => vec![
                format!("Add '{name}' to the template directory"),
                "Check paths.templates_dir: sola config list".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Fix the placeholders in '{template}'"),
                "Placeholders look like {{ project_name }}".into(),
            ],
            Self::FilesystemFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::RemoteCallFailure { status, .. } => match status {
                Some(401) | Some(403) => vec![
                    "The API key was rejected".into(),
                    "Store a new key: sola auth".into(),
                ],
                Some(429) => vec!["Rate limited or out of quota; try again later".into()],
                _ => vec![
                    "Check your network connection".into(),
                    "Check generation.base_url: sola config list".into(),
                ],
            },
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CredentialUnavailable { .. } => ErrorCategory::CredentialUnavailable,
            Self::TemplateMissing { .. } => ErrorCategory::TemplateMissing,
            Self::RenderingFailed { .. } => ErrorCategory::Rendering,
            Self::FilesystemFailure { .. } => ErrorCategory::Filesystem,
            Self::RemoteCallFailure { .. } => ErrorCategory::RemoteCall,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
