//! Scripted text-generation driver.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use vellum_core::{GenerateRequest, GenerateResponse, Output};
use vellum_error::{ModelsError, ModelsErrorKind, VellumResult};
use vellum_interface::VellumDriver;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Plain generated text
    Text(String),
    /// Structured refusal reported by the service
    Refusal(String),
    /// Service failure
    Error(ModelsErrorKind),
}

impl MockReply {
    /// Shorthand for a text reply.
    pub fn text(text: impl Into<String>) -> Self {
        MockReply::Text(text.into())
    }
}

/// Driver that replays scripted replies and records every request.
///
/// Once the script runs out it answers with a numbered expansion in the
/// `### 1) NARRATION:` layout.
#[derive(Debug, Default)]
pub struct MockDriver {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockDriver {
    /// Driver that only gives default replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver that gives these replies first, in order.
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The user message of request `i`.
    pub fn user_prompt(&self, i: usize) -> String {
        self.requests()[i].messages()[1].content().clone()
    }
}

#[async_trait]
impl VellumDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> VellumResult<GenerateResponse> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len()
        };

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Text(text)) => Ok(GenerateResponse::new(vec![Output::Text(text)])),
            Some(MockReply::Refusal(reason)) => {
                Ok(GenerateResponse::new(vec![Output::Refusal(reason)]))
            }
            Some(MockReply::Error(kind)) => Err(ModelsError::new(kind).into()),
            None => Ok(GenerateResponse::new(vec![Output::Text(format!(
                "### 1) NARRATION:\nGenerated narration {call}.\n\n### 2) CLOSING BEAT:\nThe ledger stays open."
            ))])),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
