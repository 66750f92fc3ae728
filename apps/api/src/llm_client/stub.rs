//! Scripted `LlmService` for tests. Records every call.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, LlmService};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub context: String,
    pub prompt: String,
}

#[derive(Default)]
pub struct StubLlm {
    responses: Mutex<VecDeque<Result<String, u16>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubLlm {
    pub fn replying(responses: &[&str]) -> Self {
        let stub = Self::default();
        for r in responses {
            stub.push_ok(r);
        }
        stub
    }

    pub fn failing(status: u16) -> Self {
        let stub = Self::default();
        stub.responses.lock().unwrap().push_back(Err(status));
        stub
    }

    pub fn push_ok(&self, response: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(response.to_string()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmService for StubLlm {
    async fn generate(&self, context: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            context: context.to_string(),
            prompt: prompt.to_string(),
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(status)) => Err(LlmError::Api {
                status,
                message: "stubbed failure".to_string(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}
