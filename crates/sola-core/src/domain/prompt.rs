//! Prompt construction and completion post-processing for `sola build`.

use serde::Serialize;

/// Model used when configuration does not override it.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature used when configuration does not override it.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// File names of the standards documents inside the specs directory.
pub const ARCHITECTURE_SPEC: &str = "ARCHITECTURE.md";
pub const ENGINEERING_SPEC: &str = "AI_ENGINEERING.md";

/// The two reference documents every generated service must follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standards {
    pub architecture: String,
    pub engineering: String,
}

impl Standards {
    pub fn new(architecture: impl Into<String>, engineering: impl Into<String>) -> Self {
        Self {
            architecture: architecture.into(),
            engineering: engineering.into(),
        }
    }

    /// Both documents, verbatim, under their section banners.
    pub fn block(&self) -> String {
        format!(
            "=== SOLA ARCHITECTURE ===\n{}\n\n=== AI ENGINEERING STANDARDS ===\n{}\n",
            self.architecture, self.engineering
        )
    }

    /// System instruction: role, standards block, then the fixed rules.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are a Senior AI Backend Architect strictly following SOLA standards.\n\
             {}\n\n\
             TASK: Generate a clean, professional Python service file (services.py).\n\
             STRICT RULES:\n\
             - Return ONLY raw Python code.\n\
             - Implement Pydantic models for inputs/outputs.\n\
             - Use 'instructor' with 'AsyncOpenAI' as per standards.",
            self.block()
        )
    }
}

/// User instruction for a task description.
pub fn user_prompt(task: &str) -> String {
    format!("Create specialized business logic for: {task}")
}

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One chat-completion exchange, serialisable as the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl CompletionRequest {
    /// The two-message exchange for a task under the given standards.
    pub fn for_task(
        model: impl Into<String>,
        temperature: f32,
        standards: &Standards,
        task: &str,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: standards.system_prompt(),
                },
                ChatMessage {
                    role: Role::User,
                    content: user_prompt(task),
                },
            ],
            temperature,
        }
    }
}

/// Strip a leading fence line (```` ``` ```` with an optional language tag)
/// and a trailing ```` ``` ````, then trim.
///
/// Text without fences is only trimmed.
pub fn strip_code_fences(text: &str) -> String {
    let mut body = text.trim();

    if body.starts_with("```") {
        body = match body.find('\n') {
            Some(newline) => &body[newline + 1..],
            None => "",
        };
    }

    if let Some(stripped) = body.trim_end().strip_suffix("```") {
        body = stripped;
    }

    body.trim().to_string()
}
