mod common;

use serde_json::json;
use std::sync::Arc;

use common::{RecordingTransport, admin_json, student_json};
use laritmo_client::error::{StorageError, TransportError};
use laritmo_client::session::{SessionManager, TOKEN_KEY, USER_KEY};
use laritmo_client::storage::{KeyValueStore, MemoryStore};
use laritmo_client::transport::{ApiRequest, CredentialSlot, Method, ResponseBody, Transport};

fn hydrate(store: MemoryStore) -> (SessionManager<MemoryStore>, Arc<RecordingTransport>) {
    let (slot, reader) = CredentialSlot::new();
    let transport = RecordingTransport::new(Arc::new(reader));
    let manager = SessionManager::init_auth(transport.clone(), store, slot);
    (manager, transport)
}

/// Drop the manager and hydrate a fresh one from the same store
fn reload(manager: SessionManager<MemoryStore>) -> (SessionManager<MemoryStore>, Arc<RecordingTransport>) {
    hydrate(manager.into_store())
}

#[tokio::test]
async fn test_login_sets_session_and_bearer_header() {
    let (mut manager, transport) = hydrate(MemoryStore::new());
    transport.push_json(json!({
        "token": "t1",
        "user": {"id": 1, "username": "alice", "email": "a@x.com", "role": "admin"}
    }));

    manager.login("alice", "pw").await.unwrap();

    let login = transport.last();
    assert_eq!(login.request.method, Method::Post);
    assert_eq!(login.request.path, "/auth/login");
    assert_eq!(
        login.request.body,
        Some(json!({"username": "alice", "password": "pw"}))
    );
    assert!(manager.is_authenticated());
    assert!(manager.is_admin());
    assert_eq!(manager.token(), Some("t1"));

    transport.push_json(json!([]));
    let _ = transport.send(ApiRequest::get("/courses")).await;
    assert_eq!(transport.last().authorization.as_deref(), Some("Bearer t1"));
}

#[tokio::test]
async fn test_login_survives_reload() {
    let (mut manager, transport) = hydrate(MemoryStore::new());
    transport.push_json(json!({"token": "t2", "user": student_json()}));
    manager.login("student", "pw").await.unwrap();

    let (manager, transport) = reload(manager);
    assert!(manager.is_authenticated());
    assert!(!manager.is_admin());
    assert_eq!(manager.user().map(|u| u.username.as_str()), Some("student"));

    transport.push_json(json!([]));
    let _ = transport.send(ApiRequest::get("/labs")).await;
    assert_eq!(transport.last().authorization.as_deref(), Some("Bearer t2"));
}

#[tokio::test]
async fn test_failed_login_keeps_previous_session() {
    let store = MemoryStore::with_entries([
        (TOKEN_KEY, "old".to_string()),
        (USER_KEY, admin_json().to_string()),
    ]);
    let (mut manager, transport) = hydrate(store);
    transport.push(Err(TransportError::Status {
        status: 401,
        body: ResponseBody::Json(json!({"error": "Invalid credentials"})),
    }));

    let err = manager.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("Invalid credentials"));
    assert!(manager.is_authenticated());
    assert_eq!(manager.token(), Some("old"));
}

#[test]
fn test_authenticated_only_with_token_and_user() {
    let (manager, _) = hydrate(MemoryStore::with_entries([(TOKEN_KEY, "abc")]));
    assert!(!manager.is_authenticated());
    assert_eq!(manager.token(), Some("abc"));

    let (manager, _) = manager_with_user_only();
    assert!(!manager.is_authenticated());
    assert!(manager.user().is_some());

    let (manager, _) = hydrate(MemoryStore::new());
    assert!(!manager.is_authenticated());
}

fn manager_with_user_only() -> (SessionManager<MemoryStore>, Arc<RecordingTransport>) {
    hydrate(MemoryStore::with_entries([(USER_KEY, student_json().to_string())]))
}

#[test]
fn test_sentinel_user_entries_are_erased() {
    for sentinel in ["undefined", "null"] {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "abc"), (USER_KEY, sentinel)]);
        let (manager, _) = hydrate(store);

        assert!(manager.user().is_none());
        assert!(!manager.is_authenticated());
        assert_eq!(manager.store().get(USER_KEY).unwrap(), None);
        assert_eq!(manager.store().get(TOKEN_KEY).unwrap(), Some("abc".into()));
    }
}

#[test]
fn test_user_without_identifier_is_erased() {
    let store = MemoryStore::with_entries([
        (TOKEN_KEY, "abc".to_string()),
        (
            USER_KEY,
            json!({"username": "ghost", "email": "g@x.io", "role": "student"}).to_string(),
        ),
    ]);
    let (manager, _) = hydrate(store);

    assert!(manager.user().is_none());
    assert!(!manager.store().contains(USER_KEY));
}

#[test]
fn test_malformed_user_is_erased() {
    let store = MemoryStore::with_entries([(USER_KEY, "{not json")]);
    let (manager, _) = hydrate(store);
    assert!(manager.user().is_none());
    assert!(manager.store().is_empty());
}

#[tokio::test]
async fn test_logout_clears_storage_and_header() {
    let store = MemoryStore::with_entries([
        (TOKEN_KEY, "t1".to_string()),
        (USER_KEY, admin_json().to_string()),
    ]);
    let (mut manager, transport) = hydrate(store);
    assert!(manager.is_authenticated());

    manager.logout();

    assert!(!manager.is_authenticated());
    assert_eq!(manager.token(), None);
    assert_eq!(manager.store().get(TOKEN_KEY).unwrap(), None);
    assert_eq!(manager.store().get(USER_KEY).unwrap(), None);

    transport.push_json(json!([]));
    let _ = transport.send(ApiRequest::get("/courses")).await;
    assert_eq!(transport.last().authorization, None);

    // A second logout is harmless
    manager.logout();
    assert!(manager.store().is_empty());
}

/// Store whose writes to one key always fail
struct RejectingStore {
    inner: MemoryStore,
    rejected_key: &'static str,
}

impl KeyValueStore for RejectingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.rejected_key {
            return Err(StorageError::IoError(std::io::Error::other("disk full")));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

#[tokio::test]
async fn test_partial_persist_never_mixes_identities() {
    let store = RejectingStore {
        inner: MemoryStore::with_entries([
            (TOKEN_KEY, "admin-token".to_string()),
            (USER_KEY, admin_json().to_string()),
        ]),
        rejected_key: USER_KEY,
    };
    let (slot, reader) = CredentialSlot::new();
    let transport = RecordingTransport::new(Arc::new(reader));
    let mut manager = SessionManager::init_auth(transport.clone(), store, slot);
    assert!(manager.is_admin());

    transport.push_json(json!({"token": "student-token", "user": student_json()}));
    manager.login("student", "pw").await.unwrap();

    // The live session still reflects the successful login
    assert_eq!(manager.token(), Some("student-token"));
    assert!(!manager.is_admin());

    let store = manager.into_store();
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.get(USER_KEY).unwrap(), None);

    let (slot, reader) = CredentialSlot::new();
    let reloaded = SessionManager::init_auth(RecordingTransport::new(Arc::new(reader)), store, slot);
    assert!(!reloaded.is_authenticated());
    assert!(!reloaded.is_admin());
    assert_eq!(reloaded.token(), None);
}
