//! Exam tickets
//!
//! Ticket generation requests and saving of generated documents.

pub mod download;
pub mod models;
pub mod operations;

pub use download::{DEFAULT_DOCUMENT_NAME, save_blob};
pub use models::{Question, Ticket, TicketGenerationRequest};
pub use operations::{classify_document_failure, generate_random_ticket, generate_tickets_document};
