//! Request and response types for text generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Generation request: ordered role-tagged messages plus sampling parameters.
///
/// # Examples
///
/// ```
/// use vellum_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("You are a narrator."), Message::user("Begin.")])
///     .max_tokens(Some(900))
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), Some(900));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model identifier override
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Concatenated text of every message, in order.
    pub fn prompt_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content().as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use vellum_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse::new(vec![Output::Text("1. A beat".to_string())]);
/// assert_eq!(response.text(), "1. A beat");
/// assert!(response.refusal().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Wrap a list of outputs.
    pub fn new(outputs: Vec<Output>) -> Self {
        Self { outputs }
    }

    /// All text outputs joined with newlines.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|o| match o {
                Output::Text(text) => Some(text.as_str()),
                Output::Refusal(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// First explicit refusal reported by the service, if any.
    pub fn refusal(&self) -> Option<&str> {
        self.outputs.iter().find_map(|o| match o {
            Output::Refusal(reason) => Some(reason.as_str()),
            Output::Text(_) => None,
        })
    }
}
