//! Ticket requests
//!
//! Random single tickets and bulk downloadable ticket documents.

use log::{info, warn};

use crate::error::{TicketError, TransportError};
use crate::tickets::models::{ErrorPayload, Ticket, TicketGenerationRequest, TicketResponse};
use crate::transport::{ApiRequest, Blob, ResponseBody, Transport, fetch_blob, fetch_json};

/// Fetch one randomly assembled ticket for a course.
///
/// Transport errors are returned unchanged.
pub async fn generate_random_ticket(
    transport: &dyn Transport,
    course_id: i64,
    questions_count: u32,
) -> Result<Ticket, TransportError> {
    let request = ApiRequest::get(format!("/courses/{}/tickets/random", course_id))
        .with_query("questions", questions_count);

    let envelope: TicketResponse = fetch_json(transport, request).await?;
    info!(
        "Generated ticket #{} for course {} ({} questions)",
        envelope.ticket.number,
        course_id,
        envelope.ticket.questions.len()
    );
    Ok(envelope.ticket)
}

/// Generate a document of several tickets (admin only).
///
/// The endpoint answers with a binary document on success. Failures arrive
/// through the same binary channel and usually hold `{"error": "..."}`:
/// - a failure blob with a usable `error` field becomes `TicketError::Server`
/// - any other failure blob becomes `TicketError::GenerationFailed`
/// - a failure without a blob body is returned as the original transport error
pub async fn generate_tickets_document(
    transport: &dyn Transport,
    course_id: i64,
    request: &TicketGenerationRequest,
) -> Result<Blob, TicketError> {
    let api_request = ApiRequest::post(format!("/admin/courses/{}/tickets/generate", course_id))
        .with_json(request)?;

    match fetch_blob(transport, api_request).await {
        Ok(blob) => {
            info!(
                "Generated {} tickets for course {} ({} bytes)",
                request.ticket_count,
                course_id,
                blob.len()
            );
            Ok(blob)
        }
        Err(err) => Err(classify_document_failure(err)),
    }
}

/// Map a failed document request onto a `TicketError`
pub fn classify_document_failure(err: TransportError) -> TicketError {
    match err {
        TransportError::Status {
            status,
            body: ResponseBody::Blob(blob),
        } => match error_message(&blob) {
            Some(message) => {
                warn!("Ticket generation rejected ({}): {}", status, message);
                TicketError::Server(message)
            }
            None => {
                warn!(
                    "Ticket generation failed ({}) with an unreadable body of {} bytes",
                    status,
                    blob.len()
                );
                TicketError::GenerationFailed
            }
        },
        other => TicketError::Transport(other),
    }
}

/// `error` field of a blob holding UTF-8 JSON, if non-empty
fn error_message(blob: &Blob) -> Option<String> {
    let text = blob.text()?;
    let payload: ErrorPayload = serde_json::from_str(text).ok()?;
    payload.error.filter(|message| !message.is_empty())
}
