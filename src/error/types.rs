//! Error types
//!
//! Defines domain-specific error types for each module of the client.

use std::fmt;
use std::io;

use crate::transport::ResponseBody;

/// Fixed message surfaced when a ticket document failure carries no usable detail
pub const TICKET_GENERATION_FAILED: &str = "Failed to generate tickets";

/// Transport module errors
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// No response was received (connection refused, DNS, timeout, ...)
    Network(String),
    /// The server answered with a non-2xx status
    Status { status: u16, body: ResponseBody },
    /// A 2xx response whose body did not match the expected shape
    Decode(String),
    /// The request could not be built
    InvalidRequest(String),
}

impl TransportError {
    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `error` field of a JSON failure body, e.g. `{"error": "Course not found"}`
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Status {
                body: ResponseBody::Json(value),
                ..
            } => value.get("error").and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "Network error: {}", msg),
            TransportError::Status { status, .. } => match self.server_message() {
                Some(msg) => write!(f, "HTTP {}: {}", status, msg),
                None => write!(f, "HTTP {}", status),
            },
            TransportError::Decode(msg) => write!(f, "Unexpected response body: {}", msg),
            TransportError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<serde_json::Error> for TransportError {
    fn from(error: serde_json::Error) -> Self {
        TransportError::Decode(error.to_string())
    }
}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    IoError(io::Error),
    Serialization(String),
    InvalidFilename(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
            StorageError::Serialization(msg) => write!(f, "Corrupt state file: {}", msg),
            StorageError::InvalidFilename(name) => write!(f, "Invalid filename: {}", name),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error.to_string())
    }
}

/// Ticket document generation errors
#[derive(Debug, Clone, PartialEq)]
pub enum TicketError {
    /// The server explained the failure; the message is shown verbatim
    Server(String),
    /// The failure body could not be interpreted
    GenerationFailed,
    /// The failure did not come through the document channel at all
    Transport(TransportError),
}

impl TicketError {
    /// Human-readable failure reason
    pub fn message(&self) -> String {
        match self {
            TicketError::Server(msg) => msg.clone(),
            TicketError::GenerationFailed => TICKET_GENERATION_FAILED.to_string(),
            TicketError::Transport(e) => e.to_string(),
        }
    }
}

impl fmt::Display for TicketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TicketError {}

impl From<TransportError> for TicketError {
    fn from(error: TransportError) -> Self {
        TicketError::Transport(error)
    }
}

/// Interactive shell errors
#[derive(Debug, Clone, PartialEq)]
pub enum ShellError {
    Usage(String),
    NotLoggedIn,
    AdminRequired,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Usage(usage) => write!(f, "Usage: {}", usage),
            ShellError::NotLoggedIn => write!(f, "Not logged in"),
            ShellError::AdminRequired => write!(f, "Administrator role required"),
        }
    }
}

impl std::error::Error for ShellError {}

/// General client error that encompasses all error types
#[derive(Debug)]
pub enum ClientError {
    Transport(TransportError),
    Storage(StorageError),
    Ticket(TicketError),
    Config(config::ConfigError),
    Shell(ShellError),
    IoError(io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "Request failed: {}", e),
            ClientError::Storage(e) => write!(f, "Storage error: {}", e),
            ClientError::Ticket(e) => write!(f, "Ticket generation failed: {}", e),
            ClientError::Config(e) => write!(f, "Configuration error: {}", e),
            ClientError::Shell(e) => write!(f, "{}", e),
            ClientError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<TransportError> for ClientError {
    fn from(error: TransportError) -> Self {
        ClientError::Transport(error)
    }
}

impl From<StorageError> for ClientError {
    fn from(error: StorageError) -> Self {
        ClientError::Storage(error)
    }
}

impl From<TicketError> for ClientError {
    fn from(error: TicketError) -> Self {
        ClientError::Ticket(error)
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(error: config::ConfigError) -> Self {
        ClientError::Config(error)
    }
}

impl From<ShellError> for ClientError {
    fn from(error: ShellError) -> Self {
        ClientError::Shell(error)
    }
}

impl From<io::Error> for ClientError {
    fn from(error: io::Error) -> Self {
        ClientError::IoError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_error_shows_server_message() {
        let err = TransportError::Status {
            status: 404,
            body: ResponseBody::Json(json!({"error": "Course not found"})),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_message(), Some("Course not found"));
        assert_eq!(err.to_string(), "HTTP 404: Course not found");
    }

    #[test]
    fn test_status_error_without_json_body() {
        let err = TransportError::Status {
            status: 502,
            body: ResponseBody::Text("Bad Gateway".into()),
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_ticket_error_messages() {
        assert_eq!(
            TicketError::Server("No questions available".into()).to_string(),
            "No questions available"
        );
        assert_eq!(
            TicketError::GenerationFailed.to_string(),
            TICKET_GENERATION_FAILED
        );
    }
}
