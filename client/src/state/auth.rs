//! Auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal` context so the navigation bar and pages re-render
//! on login and logout. The session store stays the source of truth; this is
//! refreshed from it after every change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::SessionStore;
use super::storage::KeyValueStore;
use crate::net::types::{Role, UserProfile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub authenticated: bool,
}

impl AuthState {
    pub fn from_session<S: KeyValueStore>(session: &SessionStore<S>) -> Self {
        Self {
            user: session.current_user(),
            authenticated: session.is_authenticated(),
        }
    }

    #[must_use]
    pub fn signed_in(profile: UserProfile) -> Self {
        Self {
            user: Some(profile),
            authenticated: true,
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.user.as_ref().map(|u| u.role.clone()).unwrap_or_default()
    }

    /// Name shown in the navigation bar.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let full = format!("{} {}", user.first_name, user.last_name);
        let full = full.trim();
        if full.is_empty() {
            Some(user.username.clone())
        } else {
            Some(full.to_owned())
        }
    }
}
