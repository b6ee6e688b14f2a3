//! Message types for generation requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single role-tagged text block.
///
/// # Examples
///
/// ```
/// use vellum_core::{Message, Role};
///
/// let message = Message::user("Expand this beat.");
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Expand this beat.");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// Text content
    content: String,
}

impl Message {
    /// Create a message with the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system (persona) message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user (task) message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates a new message builder.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
