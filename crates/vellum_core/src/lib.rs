//! Core data types for the Vellum creator workbench.
//!
//! This crate provides the foundation data types shared by the provider
//! clients, the project document layer, and the generation workflows.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod message;
mod output;
mod project_type;
mod request;
mod role;
mod task;

pub use channel::ChannelStyle;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use project_type::ProjectType;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use task::{GenerationTask, TaskParams};
