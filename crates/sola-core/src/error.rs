//! Unified error handling for Sola Core.
//!
//! Every failure the tool can meet falls into one [`ErrorCategory`]. The CLI
//! maps categories to exit codes; nothing below the CLI decides how an error
//! is displayed.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sola Core operations.
#[derive(Debug, Error, Clone)]
pub enum SolaError {
    /// Errors from the domain layer (invalid input, rendering rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, remote calls, lookups).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SolaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display and exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the error only means "this template is not on disk".
    ///
    /// The scaffolder skips such files instead of failing.
    pub fn is_template_missing(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::TemplateMissing { .. }))
    }
}

/// Closed set of failure kinds, one per distinct handling at the command
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad project name, empty task, empty key.
    InvalidInput,
    /// No credential source produced a key.
    CredentialUnavailable,
    /// A named template is not present in the template directory.
    TemplateMissing,
    /// A template referenced a value the context does not provide.
    Rendering,
    /// Reading or writing the filesystem failed.
    Filesystem,
    /// The completion endpoint failed or answered with garbage.
    RemoteCall,
    /// A lock guarding shared adapter state was poisoned.
    Internal,
}

/// Convenient result type alias.
pub type SolaResult<T> = Result<T, SolaError>;
