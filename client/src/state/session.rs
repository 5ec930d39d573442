//! Persisted session: access token, refresh token and flat user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards read this synchronously on every navigation; the auth client
//! writes it once both login requests have succeeded. A session counts as
//! authenticated purely on the presence of an access token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::storage::KeyValueStore;
use crate::net::types::{Role, TokenPair, UserProfile};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace whatever session was stored before.
    pub fn store(&self, tokens: &TokenPair, profile: &UserProfile) {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access);
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh);
        match serde_json::to_string(profile) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => {
                log::warn!("could not serialize user profile: {e}");
                self.storage.remove(USER_KEY);
            }
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Stored profile. Unparsable data reads as no user.
    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::debug!("ignoring malformed stored user: {e}");
                None
            }
        }
    }

    /// Stored role, or [`Role::Guest`] without a profile.
    pub fn current_user_role(&self) -> Role {
        self.current_user().map(|user| user.role).unwrap_or_default()
    }

    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
