//! Tests for the retry boundary.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use vellum_core::{GenerateRequest, GenerateResponse, Message, Output};
use vellum_error::{ModelsError, ModelsErrorKind, VellumResult};
use vellum_interface::VellumDriver;
use vellum_rate_limit::{RetryConfig, RetryingDriver};

/// Fails with the given status a fixed number of times, then succeeds.
struct FlakyDriver {
    failures: usize,
    status: u16,
    calls: AtomicUsize,
}

impl FlakyDriver {
    fn new(failures: usize, status: u16) -> Self {
        Self {
            failures,
            status,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VellumDriver for FlakyDriver {
    async fn generate(&self, _req: &GenerateRequest) -> VellumResult<GenerateResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: self.status,
                message: "flaky".to_string(),
            })
            .into());
        }
        Ok(GenerateResponse::new(vec![Output::Text("ok".to_string())]))
    }

    fn provider_name(&self) -> &'static str {
        "flaky"
    }

    fn model_name(&self) -> &str {
        "flaky-1"
    }
}

fn fast_policy(max_retries: usize) -> RetryConfig {
    RetryConfig {
        max_retries,
        initial_backoff_ms: 1,
        max_delay_secs: 1,
    }
}

fn request() -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![Message::user("hello")])
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_transient_errors_are_retried() {
    let driver = RetryingDriver::new(FlakyDriver::new(2, 503), fast_policy(3));

    let response = driver.generate(&request()).await.unwrap();

    assert_eq!(response.text(), "ok");
    assert_eq!(driver.inner().calls(), 3);
}

#[tokio::test]
async fn test_retries_stop_at_limit() {
    let driver = RetryingDriver::new(FlakyDriver::new(10, 429), fast_policy(2));

    let err = driver.generate(&request()).await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(driver.inner().calls(), 3);
}

#[tokio::test]
async fn test_permanent_errors_fail_immediately() {
    let driver = RetryingDriver::new(FlakyDriver::new(1, 401), fast_policy(5));

    let err = driver.generate(&request()).await.unwrap_err();

    assert!(!err.is_retryable());
    assert!(err.to_string().contains("401"));
    assert_eq!(driver.inner().calls(), 1);
}

#[tokio::test]
async fn test_zero_retries_is_single_attempt() {
    let driver = RetryingDriver::new(FlakyDriver::new(1, 500), fast_policy(0));

    assert!(driver.generate(&request()).await.is_err());
    assert_eq!(driver.inner().calls(), 1);
}

#[tokio::test]
async fn test_names_pass_through() {
    let driver = RetryingDriver::new(FlakyDriver::new(0, 500), fast_policy(1));

    assert_eq!(driver.provider_name(), "flaky");
    assert_eq!(driver.model_name(), "flaky-1");
}
