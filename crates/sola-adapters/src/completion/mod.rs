//! Remote chat-completion adapters.

mod openai;

pub use openai::{DEFAULT_BASE_URL, OpenAiClient};
