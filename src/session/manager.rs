//! Session manager
//!
//! Owns the session, mirrors it into durable storage and is the only writer of
//! the credential the transport attaches to requests.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{StorageError, TransportError};
use crate::session::profile::{StoredUser, UserProfile, parse_stored_user};
use crate::session::state::Session;
use crate::session::{TOKEN_KEY, USER_KEY};
use crate::storage::KeyValueStore;
use crate::transport::{ApiRequest, CredentialSlot, SessionCredentials, Transport, fetch_json};

const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: UserProfile,
}

pub struct SessionManager<S: KeyValueStore> {
    transport: Arc<dyn Transport>,
    store: S,
    credentials: CredentialSlot,
    session: Session,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Hydrate the session from `store`.
    ///
    /// A corrupt `user` entry is logged, erased and dropped; the token is kept,
    /// which leaves the session unauthenticated until the next login.
    pub fn init_auth(transport: Arc<dyn Transport>, mut store: S, credentials: CredentialSlot) -> Self {
        let token = read_entry(&store, TOKEN_KEY);

        let user = match read_entry(&store, USER_KEY) {
            Some(raw) => match parse_stored_user(&raw) {
                StoredUser::Valid(profile) => Some(profile),
                StoredUser::Corrupt(reason) => {
                    warn!("Discarding stored user ({})", reason);
                    if let Err(e) = store.remove(USER_KEY) {
                        warn!("Failed to erase stored user: {}", e);
                    }
                    None
                }
            },
            None => None,
        };

        credentials.set(token.clone());
        let session = Session::restored(token, user);

        match session.user() {
            Some(user) if session.is_authenticated() => {
                info!("Restored session for {} ({})", user.username, user.role)
            }
            _ if session.token().is_some() => info!("Restored token without a user profile"),
            _ => info!("No stored session"),
        }

        Self {
            transport,
            store,
            credentials,
            session,
        }
    }

    /// Authenticate against the API and replace the current session.
    ///
    /// Transport failures are returned unchanged and leave the current session
    /// untouched. Persisting the new session is best effort; if it fails
    /// part-way, both stored entries are dropped so a reload never pairs the
    /// new token with an older profile.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), TransportError> {
        let request =
            ApiRequest::post(LOGIN_PATH).with_json(&LoginRequest { username, password })?;
        let response: LoginResponse = fetch_json(self.transport.as_ref(), request).await?;

        if let Err(e) = self.persist(&response) {
            warn!("Failed to persist session for {}: {}", response.user.username, e);
            self.clear_stored();
        }

        info!("Logged in as {} ({})", response.user.username, response.user.role);
        self.credentials.set(Some(response.token.clone()));
        self.session = Session::authenticated(response.token, response.user);
        Ok(())
    }

    /// Drop the session, its stored entries and the credential. Never fails.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            info!("Logging out {}", user.username);
        }

        self.session = Session::anonymous();
        self.credentials.set(None);
        self.clear_stored();
    }

    fn clear_stored(&mut self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to remove stored {}: {}", key, e);
            }
        }
    }

    fn persist(&mut self, response: &LoginResponse) -> Result<(), StorageError> {
        let user = serde_json::to_string(&response.user)?;
        self.store.set(TOKEN_KEY, &response.token)?;
        self.store.set(USER_KEY, &user)?;
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Read half of the credential, for building further transports
    pub fn credentials(&self) -> SessionCredentials {
        self.credentials.reader()
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give back the store, e.g. to hydrate a fresh manager from it
    pub fn into_store(self) -> S {
        self.store
    }
}

fn read_entry<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to read stored {}: {}", key, e);
            None
        }
    }
}
