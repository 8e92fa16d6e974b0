//! API transport
//!
//! The `Transport` trait every API binding goes through, its HTTP
//! implementation, and typed helpers for JSON and blob responses.

pub mod credentials;
pub mod http;
pub mod request;
pub mod response;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::TransportError;

pub use credentials::{
    Anonymous, CredentialProvider, CredentialSlot, SessionCredentials, authorization_value,
};
pub use http::HttpTransport;
pub use request::{ApiRequest, Method, ResponseType};
pub use response::{ApiResponse, Blob, ResponseBody};

/// Performs one API call. Non-2xx responses come back as
/// `TransportError::Status` with the body decoded per the request's
/// `ResponseType`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Send a request and decode the JSON response body into `T`
pub async fn fetch_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: ApiRequest,
) -> Result<T, TransportError> {
    let response = transport.send(request).await?;
    match response.body {
        ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
        ResponseBody::Empty => Ok(serde_json::from_value(serde_json::Value::Null)?),
        ResponseBody::Text(text) => Err(TransportError::Decode(format!(
            "expected JSON, got `{}`",
            text.chars().take(80).collect::<String>()
        ))),
        ResponseBody::Blob(_) => Err(TransportError::Decode(
            "expected JSON, got a binary payload".into(),
        )),
    }
}

/// Send a request that must come back as raw bytes
pub async fn fetch_blob(
    transport: &dyn Transport,
    request: ApiRequest,
) -> Result<Blob, TransportError> {
    let response = transport.send(request.expect_blob()).await?;
    Ok(response.body.into_blob())
}
