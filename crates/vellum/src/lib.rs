//! Vellum - a command-line workbench for horror narration.
//!
//! Vellum turns a story seed into a recorded-ready script through a chain of
//! markdown documents inside a project folder:
//!
//! 1. `add-outline` appends a numbered outline to `outline.md`,
//! 2. `curate` keeps the beats worth drafting in `beats_final.md`,
//! 3. `draft` expands each beat into `script.md`,
//! 4. `polish` writes notes or a revised script,
//! 5. `finalize` extracts narration and applies the editor's swaps,
//! 6. `publish` drafts titles, descriptions and thumbnail concepts.
//!
//! Every step appends a timestamped section; nothing is rewritten.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vellum::{GenerationContext, OpenAIClient, RetryingDriver, VellumConfig};
//! use vellum::workflow::generate_outline;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VellumConfig::load()?;
//! let driver = RetryingDriver::new(OpenAIClient::from_config(&config.provider)?, config.retry);
//! let ctx = GenerationContext::new(&driver, &config);
//!
//! let outline = generate_outline(&ctx, Some("shrouded"), "A radio tower hums at night.", 10).await?;
//! println!("{:?}", outline);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `vellum_error` - Error kinds with source locations
//! - `vellum_core` - Messages, requests, channel presets, project types
//! - `vellum_interface` - The `VellumDriver` trait
//! - `vellum_rate_limit` - Layered configuration and retries
//! - `vellum_models` - OpenAI-compatible chat-completions client
//! - `vellum_project` - Project folders and append-only documents
//! - `vellum_narrative` - Parsers, prompt assembly and workflows
//!
//! This crate re-exports them and hosts the `vellum` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod observability;

pub use vellum_core::*;
pub use vellum_error::*;
pub use vellum_interface::*;
pub use vellum_models::*;
pub use vellum_narrative::*;
pub use vellum_project::*;
pub use vellum_rate_limit::*;
