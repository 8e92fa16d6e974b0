//! User profile and its stored form
//!
//! The persisted `user` entry is untrusted: older builds could leave the
//! literal strings `undefined`/`null` behind, and the file can be edited by
//! hand. `parse_stored_user` turns it into a tagged result instead of assuming
//! it decodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Outcome of reading the persisted `user` entry
#[derive(Debug, Clone, PartialEq)]
pub enum StoredUser {
    Valid(UserProfile),
    Corrupt(CorruptEntry),
}

/// Why a persisted `user` entry was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum CorruptEntry {
    /// `undefined` or `null` written in place of a record
    Sentinel(String),
    /// Not JSON, or JSON that is not a profile
    Malformed(String),
    /// Decoded, but without a usable `id`
    MissingIdentifier,
}

impl fmt::Display for CorruptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptEntry::Sentinel(marker) => write!(f, "sentinel value `{}`", marker),
            CorruptEntry::Malformed(msg) => write!(f, "malformed record: {}", msg),
            CorruptEntry::MissingIdentifier => write!(f, "record has no id"),
        }
    }
}

const SENTINELS: [&str; 2] = ["undefined", "null"];

pub fn parse_stored_user(raw: &str) -> StoredUser {
    let trimmed = raw.trim();
    if SENTINELS.contains(&trimmed) {
        return StoredUser::Corrupt(CorruptEntry::Sentinel(trimmed.to_string()));
    }

    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => return StoredUser::Corrupt(CorruptEntry::Malformed(e.to_string())),
    };

    let has_id = value.get("id").is_some_and(|id| !id.is_null());
    if !has_id {
        return StoredUser::Corrupt(CorruptEntry::MissingIdentifier);
    }

    match serde_json::from_value::<UserProfile>(value) {
        Ok(profile) => StoredUser::Valid(profile),
        Err(e) => StoredUser::Corrupt(CorruptEntry::Malformed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let raw = r#"{"id":1,"username":"alice","email":"a@x.com","role":"admin"}"#;
        match parse_stored_user(raw) {
            StoredUser::Valid(profile) => {
                assert_eq!(profile.id, 1);
                assert!(profile.is_admin());
            }
            other => panic!("expected valid profile, got {:?}", other),
        }
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(
            parse_stored_user("undefined"),
            StoredUser::Corrupt(CorruptEntry::Sentinel("undefined".into()))
        );
        assert_eq!(
            parse_stored_user("null"),
            StoredUser::Corrupt(CorruptEntry::Sentinel("null".into()))
        );
    }

    #[test]
    fn test_missing_or_null_id() {
        let raw = r#"{"username":"alice","email":"a@x.com","role":"student"}"#;
        assert_eq!(
            parse_stored_user(raw),
            StoredUser::Corrupt(CorruptEntry::MissingIdentifier)
        );

        let raw = r#"{"id":null,"username":"alice","email":"a@x.com","role":"student"}"#;
        assert_eq!(
            parse_stored_user(raw),
            StoredUser::Corrupt(CorruptEntry::MissingIdentifier)
        );

        assert_eq!(
            parse_stored_user("[1,2,3]"),
            StoredUser::Corrupt(CorruptEntry::MissingIdentifier)
        );
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            parse_stored_user("{not json"),
            StoredUser::Corrupt(CorruptEntry::Malformed(_))
        ));
        assert!(matches!(
            parse_stored_user(r#"{"id":"abc","username":"a","email":"e","role":"r"}"#),
            StoredUser::Corrupt(CorruptEntry::Malformed(_))
        ));
    }
}
