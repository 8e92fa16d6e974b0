//! Error handlers
//!
//! Provides error reporting and status mapping for the shell and binary.

use crate::error::types::{ClientError, TransportError};
use log::{error, warn};

/// Log a client error at a level matching its severity
pub fn handle_error(err: &ClientError) {
    match err {
        ClientError::Shell(_) => warn!("{}", err),
        ClientError::Transport(TransportError::Status { status, .. }) if *status < 500 => {
            warn!("{}", err)
        }
        _ => error!("{}", err),
    }
}

/// Convert error to a process exit status
pub fn error_to_exit_code(err: &ClientError) -> i32 {
    match err {
        ClientError::Shell(_) => 2,
        ClientError::Transport(TransportError::Status { status: 401, .. })
        | ClientError::Transport(TransportError::Status { status: 403, .. }) => 3,
        ClientError::Transport(_) => 4,
        ClientError::Ticket(_) => 5,
        ClientError::Storage(_) => 6,
        ClientError::IoError(_) => 74,
        ClientError::Config(_) => 78,
    }
}
