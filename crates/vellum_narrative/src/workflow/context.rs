//! Driver and configuration handed to every command.

use crate::{PromptBuilder, Screened, screen};
use tracing::{debug, instrument};
use vellum_core::{GenerateRequest, GenerateResponse};
use vellum_error::{ConfigError, VellumResult};
use vellum_interface::VellumDriver;
use vellum_rate_limit::VellumConfig;

/// What a command needs to generate text.
///
/// Offline contexts serve commands that only touch project files; asking
/// them for the driver is a configuration error.
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    driver: Option<&'a dyn VellumDriver>,
    config: &'a VellumConfig,
}

impl std::fmt::Debug for GenerationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationContext")
            .field("provider", &self.driver.map(|d| d.provider_name()))
            .field("model", &self.driver.map(|d| d.model_name()))
            .finish_non_exhaustive()
    }
}

impl<'a> GenerationContext<'a> {
    /// Context backed by a driver.
    pub fn new(driver: &'a dyn VellumDriver, config: &'a VellumConfig) -> Self {
        Self {
            driver: Some(driver),
            config,
        }
    }

    /// Context without a driver.
    pub fn offline(config: &'a VellumConfig) -> Self {
        Self {
            driver: None,
            config,
        }
    }

    /// Loaded configuration.
    pub fn config(&self) -> &'a VellumConfig {
        self.config
    }

    /// The driver, if this context has one.
    pub fn driver(&self) -> VellumResult<&'a dyn VellumDriver> {
        self.driver.ok_or_else(|| {
            ConfigError::new("This command calls the text-generation service but no provider is configured")
                .into()
        })
    }

    /// Prompt builder for a channel, or the configured default channel.
    pub fn prompts(&self, channel: Option<&str>) -> VellumResult<PromptBuilder<'a>> {
        let style = self.config.channel_or_default(channel)?;
        Ok(PromptBuilder::new(self.config, style))
    }

    /// Send one request.
    #[instrument(skip_all, fields(messages = request.messages().len()))]
    pub async fn generate(&self, request: &GenerateRequest) -> VellumResult<GenerateResponse> {
        let driver = self.driver()?;
        let response = driver.generate(request).await?;
        debug!(outputs = response.outputs().len(), "Received response");
        Ok(response)
    }

    /// Send one request and screen the reply for refusals.
    pub async fn generate_screened(&self, request: &GenerateRequest) -> VellumResult<Screened> {
        let response = self.generate(request).await?;
        Ok(screen(&response))
    }
}
