use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful, concise assistant.";

/// Sender of a chat message. Anything outside these three values fails
/// deserialization before a request reaches the handler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Prepend the default system prompt when the conversation carries none.
/// The check is existence only: any number of caller-supplied system
/// messages, at any position, passes through untouched.
pub fn ensure_system_message(mut messages: Vec<Message>) -> Vec<Message> {
    if !messages.iter().any(|m| m.role == Role::System) {
        messages.insert(
            0,
            Message {
                role: Role::System,
                content: DEFAULT_SYSTEM_PROMPT.to_string(),
            },
        );
    }
    messages
}
