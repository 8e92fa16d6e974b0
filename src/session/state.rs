//! Session state
//!
//! Token and profile of the running client. Fields are private and only
//! whole-value constructors exist, so a session is replaced, never patched.

use crate::session::profile::UserProfile;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl Session {
    /// No token, no user
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session established by a successful login
    pub fn authenticated(token: String, user: UserProfile) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    /// Session rebuilt from durable storage; either half may be missing
    pub fn restored(token: Option<String>, user: Option<UserProfile>) -> Self {
        Self { token, user }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Both a token and a recovered profile are present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserProfile::is_admin)
    }
}
