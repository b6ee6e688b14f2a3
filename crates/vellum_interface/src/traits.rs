//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use std::sync::Arc;
use vellum_core::{GenerateRequest, GenerateResponse};
use vellum_error::VellumResult;

/// Core trait that all text-generation backends must implement.
///
/// Workflows only ever see `&dyn VellumDriver`, so tests substitute a
/// deterministic mock and production wraps the HTTP client in a retry layer.
#[async_trait]
pub trait VellumDriver: Send + Sync {
    /// Generate model output for a role-tagged request.
    async fn generate(&self, req: &GenerateRequest) -> VellumResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: VellumDriver + ?Sized> VellumDriver for Box<T> {
    async fn generate(&self, req: &GenerateRequest) -> VellumResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: VellumDriver + ?Sized> VellumDriver for Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> VellumResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
