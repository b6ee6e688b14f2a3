//! Wire types for the chat-completions endpoint.

use serde::{Deserialize, Serialize};

/// One role-tagged message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    role: String,
    /// Message text
    content: String,
}

impl ChatMessage {
    /// Create a wire message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Request body for `POST /v1/chat/completions`.
#[derive(
    Debug, Clone, PartialEq, Serialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation so far
    messages: Vec<ChatMessage>,
    /// Output token ceiling
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    temperature: Option<f32>,
}

impl ChatCompletionRequest {
    /// Creates a new request builder.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Response body from the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, derive_getters::Getters)]
pub struct ChatCompletionResponse {
    /// Completion identifier
    #[serde(default)]
    id: String,
    /// Model that produced the completion
    #[serde(default)]
    model: String,
    /// Candidate completions
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Token accounting
    #[serde(default)]
    usage: Option<ChatUsage>,
}

/// A single candidate completion.
#[derive(Debug, Clone, PartialEq, Deserialize, derive_getters::Getters)]
pub struct ChatChoice {
    /// Position among the candidates
    #[serde(default)]
    index: u32,
    /// Generated message
    message: ChatResponseMessage,
    /// Why generation stopped ("stop", "length", "content_filter", ...)
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Generated message inside a choice.
#[derive(Debug, Clone, PartialEq, Deserialize, derive_getters::Getters)]
pub struct ChatResponseMessage {
    /// Role of the author, normally "assistant"
    #[serde(default)]
    role: String,
    /// Generated text
    #[serde(default)]
    content: Option<String>,
    /// Explanation when the model declined the request
    #[serde(default)]
    refusal: Option<String>,
}

/// Token usage for one completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct ChatUsage {
    /// Tokens in the prompt
    #[serde(default)]
    prompt_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    completion_tokens: u32,
    /// Sum of both
    #[serde(default)]
    total_tokens: u32,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiErrorDetail,
}

/// Error details inside the envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub(crate) message: String,
}
