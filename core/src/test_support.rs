//! In-memory transport for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::api::{Transport, TransportError};
use crate::http::{HttpRequest, HttpResponse};

/// Replays queued outcomes in order and records every request it receives.
///
/// Running out of queued outcomes yields a `TransportError`, so a test that
/// sends more requests than it scripted fails loudly.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.push(Err(TransportError(message.to_string())));
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, outcome: Result<HttpResponse, TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response left".to_string())))
    }
}
