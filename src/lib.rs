pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod preferences;
pub mod session;
pub mod shell;
pub mod storage;
pub mod tickets;
pub mod transport;

pub use client::{build_session, with_store};
pub use config::ClientConfig;
pub use error::{ClientError, TransportError};
pub use session::SessionManager;
