//! Output types from generation responses.

use serde::{Deserialize, Serialize};

/// One block of model output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Generated text.
    Text(String),

    /// The service declined the request and said so explicitly.
    Refusal(String),
}

impl Output {
    /// Text carried by this output, whichever variant it is.
    pub fn as_str(&self) -> &str {
        match self {
            Output::Text(text) | Output::Refusal(text) => text,
        }
    }
}
