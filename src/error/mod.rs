//! Error handling
//!
//! Defines error types and handling for the Laritmo client.

pub mod handlers;
pub mod types;

pub use types::*;
