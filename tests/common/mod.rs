#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use laritmo_client::error::TransportError;
use laritmo_client::transport::{
    ApiRequest, ApiResponse, CredentialProvider, ResponseBody, Transport, authorization_value,
};

/// A request as the transport saw it, with the Authorization value it would
/// have carried.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub request: ApiRequest,
    pub authorization: Option<String>,
}

/// Transport double that replays queued outcomes and records every request.
pub struct RecordingTransport {
    credentials: Arc<dyn CredentialProvider>,
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl RecordingTransport {
    pub fn new(credentials: Arc<dyn CredentialProvider>) -> Arc<Self> {
        Arc::new(Self {
            credentials,
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push(&self, outcome: Result<ApiResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(outcome);
    }

    pub fn push_json(&self, value: Value) {
        self.push(Ok(ApiResponse {
            status: 200,
            body: ResponseBody::Json(value),
        }));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().last().cloned().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let authorization = authorization_value(self.credentials.as_ref());
        self.requests.lock().unwrap().push(Recorded {
            request,
            authorization,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no response queued".into())))
    }
}

pub fn admin_json() -> Value {
    serde_json::json!({
        "id": 1,
        "username": "admin",
        "email": "admin@laritmo.io",
        "role": "admin"
    })
}

pub fn student_json() -> Value {
    serde_json::json!({
        "id": 7,
        "username": "student",
        "email": "student@laritmo.io",
        "role": "student"
    })
}
