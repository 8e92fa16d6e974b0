//! HTTP transport
//!
//! `reqwest`-backed `Transport` against the configured API base URL.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::transport::credentials::{CredentialProvider, authorization_value};
use crate::transport::request::{ApiRequest, Method};
use crate::transport::response::{ApiResponse, ResponseBody, filename_from_disposition};
use crate::transport::Transport;

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpTransport {
    pub fn new(
        config: &ApiConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);
        let mut builder = self.client.request(Self::method(request.method), &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(value) = authorization_value(self.credentials.as_ref()) {
            builder = builder.header(AUTHORIZATION, value);
        }

        debug!("{} {}", request.method.as_str(), url);

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition);

        let data = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let body = ResponseBody::decode(request.response_type, data.to_vec(), content_type, filename);

        if status.is_success() {
            debug!("{} {} -> {}", request.method.as_str(), url, status.as_u16());
            Ok(ApiResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            warn!("{} {} -> {}", request.method.as_str(), url, status.as_u16());
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
