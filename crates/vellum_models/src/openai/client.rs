use super::dto::ApiErrorEnvelope;
use crate::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use vellum_core::{GenerateRequest, GenerateResponse, Output, Role};
use vellum_error::{ModelsError, ModelsErrorKind, ModelsResult, VellumResult};
use vellum_interface::VellumDriver;
use vellum_rate_limit::ProviderConfig;

/// Client for OpenAI-compatible chat-completions endpoints.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl OpenAIClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token
    /// * `model` - Model identifier (e.g., "gpt-4o-mini")
    /// * `api_url` - Full chat-completions URL
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_url: impl Into<String>,
        timeout: Duration,
    ) -> ModelsResult<Self> {
        let model = model.into();
        let api_url = api_url.into();
        debug!(%model, %api_url, ?timeout, "Creating new OpenAI-compatible client");
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ModelsError::new(ModelsErrorKind::Http(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model,
            api_url,
        })
    }

    /// Creates a client from the `[provider]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ModelsErrorKind::MissingApiKey`] if the credential variable is unset.
    pub fn from_config(config: &ProviderConfig) -> VellumResult<Self> {
        let api_key = config.api_key()?;
        Ok(Self::new(
            api_key,
            config.model.as_str(),
            config.api_url.as_str(),
            Duration::from_secs(config.timeout_secs),
        )?)
    }

    /// Sends a request to the chat-completions endpoint.
    #[instrument(skip(self, request), fields(model = %request.model(), messages = request.messages().len()))]
    pub async fn chat(&self, request: &ChatCompletionRequest) -> ModelsResult<ChatCompletionResponse> {
        debug!("Sending chat completion request");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send chat completion request");
                ModelsError::new(ModelsErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat completions endpoint returned error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message: Self::error_message(&body),
            }));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat completion response");
            ModelsError::new(ModelsErrorKind::Parse(e.to_string()))
        })?;

        debug!(
            completion_id = %completion.id(),
            choices = completion.choices().len(),
            total_tokens = completion.usage().as_ref().map(|u| *u.total_tokens()),
            "Received chat completion"
        );
        Ok(completion)
    }

    /// Pull the human-readable message out of an error body, if it has one.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.to_string())
    }

    /// Converts a Vellum request to the wire format.
    fn convert_request(&self, request: &GenerateRequest) -> ModelsResult<ChatCompletionRequest> {
        let messages: Vec<ChatMessage> = request
            .messages()
            .iter()
            .map(|msg| {
                let role = match msg.role() {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                ChatMessage::new(role, msg.content().as_str())
            })
            .collect();

        let model = request.model().as_deref().unwrap_or(self.model.as_str());

        ChatCompletionRequest::builder()
            .model(model)
            .messages(messages)
            .max_tokens(*request.max_tokens())
            .temperature(*request.temperature())
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
    }

    /// Converts the first choice of a completion into a Vellum response.
    ///
    /// An explicit refusal or a `content_filter` stop becomes [`Output::Refusal`].
    fn convert_response(response: &ChatCompletionResponse) -> ModelsResult<GenerateResponse> {
        let choice = response
            .choices()
            .first()
            .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyResponse))?;

        let message = choice.message();
        if let Some(reason) = message.refusal().as_deref().filter(|r| !r.trim().is_empty()) {
            warn!(reason, "Service refused the request");
            return Ok(GenerateResponse::new(vec![Output::Refusal(reason.to_string())]));
        }

        if choice.finish_reason().as_deref() == Some("content_filter") {
            warn!("Completion stopped by content filter");
            let partial = message.content().clone().unwrap_or_default();
            let reason = if partial.trim().is_empty() {
                "content_filter".to_string()
            } else {
                partial
            };
            return Ok(GenerateResponse::new(vec![Output::Refusal(reason)]));
        }

        match message.content() {
            Some(text) if !text.trim().is_empty() => {
                Ok(GenerateResponse::new(vec![Output::Text(text.clone())]))
            }
            _ => Err(ModelsError::new(ModelsErrorKind::EmptyResponse)),
        }
    }
}

#[async_trait]
impl VellumDriver for OpenAIClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, request: &GenerateRequest) -> VellumResult<GenerateResponse> {
        debug!("Generating response");

        let chat_request = self.convert_request(request)?;
        let chat_response = self.chat(&chat_request).await?;
        let response = Self::convert_response(&chat_response)?;

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
