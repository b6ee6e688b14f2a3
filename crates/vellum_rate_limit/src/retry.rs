//! Retry boundary for text-generation backends.

use crate::RetryConfig;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};
use vellum_core::{GenerateRequest, GenerateResponse};
use vellum_error::VellumResult;
use vellum_interface::VellumDriver;

/// Driver decorator that retries transient failures.
///
/// Throttling, server-side statuses and dropped connections are retried with
/// exponential backoff plus jitter; any other failure is returned at once.
///
/// # Examples
///
/// ```no_run
/// use vellum_rate_limit::{RetryConfig, RetryingDriver, VellumConfig};
/// # use vellum_interface::VellumDriver;
/// # fn wrap<D: VellumDriver>(client: D) -> Result<(), Box<dyn std::error::Error>> {
/// let config = VellumConfig::load()?;
/// let driver = RetryingDriver::new(client, config.retry);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RetryingDriver<D> {
    inner: D,
    policy: RetryConfig,
}

impl<D: VellumDriver> RetryingDriver<D> {
    /// Wrap a driver with a retry policy.
    pub fn new(inner: D, policy: RetryConfig) -> Self {
        Self { inner, policy }
    }

    /// The wrapped driver.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// The active retry policy.
    pub fn policy(&self) -> &RetryConfig {
        &self.policy
    }

    /// Delays between attempts.
    ///
    /// Base 2 doubles each delay; the factor scales the first one to
    /// `initial_backoff_ms`.
    fn strategy(&self) -> impl Iterator<Item = Duration> + Send {
        let factor = (self.policy.initial_backoff_ms / 2).max(1);
        ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(Duration::from_secs(self.policy.max_delay_secs))
            .map(jitter)
            .take(self.policy.max_retries)
    }
}

#[async_trait]
impl<D: VellumDriver> VellumDriver for RetryingDriver<D> {
    #[instrument(
        skip(self, req),
        fields(
            provider = self.inner.provider_name(),
            model = self.inner.model_name(),
            max_retries = self.policy.max_retries
        )
    )]
    async fn generate(&self, req: &GenerateRequest) -> VellumResult<GenerateResponse> {
        let inner = &self.inner;
        let attempts = AtomicUsize::new(0);
        let attempts = &attempts;

        let response = Retry::spawn(self.strategy(), move || async move {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
            match inner.generate(req).await {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() => {
                    warn!(attempt, error = %e, "Transient generation failure, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Permanent generation failure, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await?;

        debug!(
            attempts = attempts.load(Ordering::SeqCst),
            "Generation succeeded"
        );
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
