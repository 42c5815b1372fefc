use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All input validation lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    /// A project name becomes a single directory under the working directory.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        Ok(())
    }

    /// Returns the trimmed task.
    pub fn validate_task(task: &str) -> Result<&str, DomainError> {
        let task = task.trim();
        if task.is_empty() {
            return Err(DomainError::EmptyTask);
        }
        Ok(task)
    }
}
