//! Credential injection
//!
//! The transport asks a `CredentialProvider` for the bearer token on every
//! request. `CredentialSlot` is the write half and stays with the session
//! manager; `SessionCredentials` is the read half handed to the transport.

use std::sync::{Arc, PoisonError, RwLock};

/// Source of the bearer token attached to outgoing requests
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// `Authorization` header value for the provider's current token
pub fn authorization_value(provider: &dyn CredentialProvider) -> Option<String> {
    provider.bearer_token().map(|token| format!("Bearer {}", token))
}

/// Write half of the shared credential.
pub struct CredentialSlot {
    token: Arc<RwLock<Option<String>>>,
}

/// Read-only view of the credential held by a `CredentialSlot`.
#[derive(Clone)]
pub struct SessionCredentials {
    token: Arc<RwLock<Option<String>>>,
}

impl CredentialSlot {
    /// Create an empty slot and its read half
    pub fn new() -> (Self, SessionCredentials) {
        let token = Arc::new(RwLock::new(None));
        let reader = SessionCredentials {
            token: Arc::clone(&token),
        };
        (Self { token }, reader)
    }

    pub(crate) fn set(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = token;
    }

    pub fn reader(&self) -> SessionCredentials {
        SessionCredentials {
            token: Arc::clone(&self.token),
        }
    }
}

impl CredentialProvider for SessionCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Provider that never authenticates
pub struct Anonymous;

impl CredentialProvider for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}
