//! Ticket data types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: i64,
    pub section: String,
    pub question: String,
}

/// One generated exam ticket; question order is as the server sent it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub number: i64,
    pub questions: Vec<Question>,
}

/// Parameters for bulk document generation. Passed to the API as-is; the
/// server enforces 1-50 questions per ticket and 1-100 tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketGenerationRequest {
    pub questions_per_ticket: u32,
    pub ticket_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TicketResponse {
    pub ticket: Ticket,
}

/// JSON error body smuggled through a blob response
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}
