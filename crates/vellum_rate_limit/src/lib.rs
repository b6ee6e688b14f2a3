//! Configuration and error recovery for the Vellum creator workbench.
//!
//! Two concerns live here:
//! - [`VellumConfig`]: layered TOML configuration (bundled defaults, user
//!   overrides, explicit `--config` file) covering the provider, retry
//!   policy, projects root, task parameters, channel presets and prompt
//!   templates.
//! - [`RetryingDriver`]: a [`VellumDriver`](vellum_interface::VellumDriver)
//!   decorator that retries transient service failures with exponential
//!   backoff and jitter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod retry;

pub use config::{PromptTemplates, ProjectsConfig, ProviderConfig, RetryConfig, VellumConfig};
pub use retry::RetryingDriver;
