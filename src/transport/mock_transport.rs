use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

use super::{HttpTransport, ResponseBody};

/// What the mock hands back for one request.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Body(Vec<u8>),
    TransportFailure(String),
    BodyFailure(String),
}

/// Mock implementation of HttpTransport for testing
///
/// Outcomes are served in the order they were queued; once the queue runs
/// dry every request gets an empty `{"data": []}` body. Every requested URL
/// is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(body: &str) -> Self {
        let mock = Self::new();
        mock.push(MockOutcome::Body(body.as_bytes().to_vec()));
        mock
    }

    pub fn push(&self, outcome: MockOutcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<Box<dyn ResponseBody>> {
        self.requests.lock().unwrap().push(url.to_string());
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Body(br#"{"data": []}"#.to_vec()));

        match outcome {
            MockOutcome::TransportFailure(msg) => Err(Error::transport(url, msg)),
            other => Ok(Box::new(MockBody(other))),
        }
    }
}

struct MockBody(MockOutcome);

#[async_trait]
impl ResponseBody for MockBody {
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>> {
        match self.0 {
            MockOutcome::Body(bytes) => Ok(bytes),
            MockOutcome::BodyFailure(msg) => Err(Error::io(msg)),
            MockOutcome::TransportFailure(msg) => Err(Error::io(msg)),
        }
    }
}
