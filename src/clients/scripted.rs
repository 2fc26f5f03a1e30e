//! In-memory [`Transport`] for unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};

use serde_json::Value;

use crate::clients::{HttpError, HttpMethod, HttpResponse, HttpResponseError, Transport};

/// A request seen by [`ScriptedTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub path: String,
    pub query: Option<BTreeMap<String, String>>,
    pub body: Option<Value>,
}

/// Replays queued replies in order and records every call.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, HttpError>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply with the given status and body.
    pub fn reply(self, code: u16, body: Value) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(code, HashMap::new(), body)));
        self
    }

    /// Queues an API error reply.
    pub fn fail(self, code: u16, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(HttpError::Response(HttpResponseError {
                code,
                message: message.to_string(),
                error_reference: None,
            })));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    fn next(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<BTreeMap<String, String>>,
        body: Option<Value>,
    ) -> Result<HttpResponse, HttpError> {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            path: path.to_string(),
            query,
            body,
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted {method} {path}"))
    }
}

impl Transport for ScriptedTransport {
    async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.next(HttpMethod::Get, path, query, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, HttpError> {
        self.next(HttpMethod::Post, path, None, Some(body))
    }

    async fn put(&self, path: &str, body: Value) -> Result<HttpResponse, HttpError> {
        self.next(HttpMethod::Put, path, None, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.next(HttpMethod::Delete, path, None, None)
    }
}
