//! Placeholder substitution for project templates.

use std::collections::HashMap;

use chrono::Datelike;

use crate::domain::DomainError;

/// Context for template rendering.
///
/// A **Value Object** containing all values a template may reference.
/// Immutable after creation.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `project_name` | "My Awesome App" | User input |
/// | `project_name_snake` | "my_awesome_app" | Computed |
/// | `project_name_kebab` | "my-awesome-app" | Computed |
/// | `project_name_pascal` | "MyAwesomeApp" | Computed |
/// | `year` | "2026" | System clock |
///
/// Templates reference them as `{{ project_name }}`; whitespace inside the
/// braces is optional.
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a new render context with automatic variable derivation.
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        vars.insert("project_name".to_string(), name.clone());
        vars.insert("project_name_snake".to_string(), to_snake_case(&name));
        vars.insert("project_name_kebab".to_string(), to_kebab_case(&name));
        vars.insert("project_name_pascal".to_string(), to_pascal_case(&name));
        vars.insert(
            "year".to_string(),
            chrono::Local::now().year().to_string(),
        );

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// The project name exactly as the user typed it.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{ variable }}` placeholders.
    ///
    /// Strict: a placeholder naming an unknown variable, or a `{{` with no
    /// closing `}}`, is an error. Substituted values are not re-scanned.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or(DomainError::UnterminatedPlaceholder {
                    offset: template.len() - rest.len() + start,
                })?;

            let name = after[..end].trim();
            let value = self
                .get(name)
                .ok_or_else(|| DomainError::UnresolvedPlaceholder {
                    name: name.to_string(),
                })?;
            out.push_str(value);

            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

/// Convert a string to snake_case.
///
/// | Input | Output |
/// |-------|--------|
/// | "MyApp" | "my_app" |
/// | "my-app" | "my_app" |
/// | "HTTPRequest" | "http_request" |
fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Same as `to_snake_case` but joins with `-`.
fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to PascalCase.
///
/// | Input | Output |
/// |-------|--------|
/// | "my-app" | "MyApp" |
/// | "HTTPRequest" | "HttpRequest" |
fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split a string into lowercase words.
///
/// Boundaries: `_`, `-`, whitespace, a lowercase→uppercase transition
/// (`myApp`), and the end of an acronym (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
