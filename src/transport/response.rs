//! Response bodies
//!
//! Decoded response payloads and the binary `Blob` type.

use serde_json::Value;

use crate::transport::request::ResponseType;

/// In-memory binary payload that has not been decoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Blob {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
    /// Filename suggested by the server's `Content-Disposition` header
    pub filename: Option<String>,
}

impl Blob {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
            filename: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Body as UTF-8 text, if it is valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(Value),
    /// A JSON-typed response whose body was not valid JSON
    Text(String),
    Blob(Blob),
}

impl ResponseBody {
    /// Interpret raw bytes the way the request asked for
    pub fn decode(
        response_type: ResponseType,
        data: Vec<u8>,
        content_type: Option<String>,
        filename: Option<String>,
    ) -> Self {
        match response_type {
            ResponseType::Blob => ResponseBody::Blob(Blob {
                data,
                content_type,
                filename,
            }),
            ResponseType::Json if data.is_empty() => ResponseBody::Empty,
            ResponseType::Json => match serde_json::from_slice::<Value>(&data) {
                Ok(value) => ResponseBody::Json(value),
                Err(_) => ResponseBody::Text(String::from_utf8_lossy(&data).into_owned()),
            },
        }
    }

    /// Convert any body into raw bytes
    pub fn into_blob(self) -> Blob {
        match self {
            ResponseBody::Empty => Blob::default(),
            ResponseBody::Json(value) => {
                Blob::new(value.to_string()).with_content_type("application/json")
            }
            ResponseBody::Text(text) => Blob::new(text),
            ResponseBody::Blob(blob) => blob,
        }
    }
}

/// Successful (2xx) response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

/// Extract `filename` from a `Content-Disposition` header value
pub fn filename_from_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
