//! Session management
//!
//! Authentication state, its persistence, and the credential it feeds to the
//! transport.

pub mod manager;
pub mod profile;
pub mod state;

pub use manager::SessionManager;
pub use profile::{CorruptEntry, StoredUser, UserProfile, parse_stored_user};
pub use state::Session;

/// Storage key of the bearer token (stored as the raw string)
pub const TOKEN_KEY: &str = "token";

/// Storage key of the user profile (stored as JSON)
pub const USER_KEY: &str = "user";
