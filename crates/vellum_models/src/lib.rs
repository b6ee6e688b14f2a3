//! Text-generation provider integrations for Vellum.
//!
//! Vellum talks to any service that speaks the OpenAI chat-completions
//! protocol. The endpoint, model and credential variable all come from the
//! `[provider]` configuration section.
//!
//! # Example
//!
//! ```no_run
//! use vellum_core::{GenerateRequest, Message};
//! use vellum_interface::VellumDriver;
//! use vellum_models::OpenAIClient;
//! use vellum_rate_limit::VellumConfig;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VellumConfig::load()?;
//! let client = OpenAIClient::from_config(&config.provider)?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Say hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatResponseMessage, ChatUsage, OpenAIClient,
};
