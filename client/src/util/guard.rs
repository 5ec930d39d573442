//! Navigation guard shared by protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages install the same redirect behavior. The decision reads
//! only the persisted session (never the network): missing token first, then
//! the admin role.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::state::storage::{BrowserStorage, KeyValueStore};

pub const AUTH_REQUIRED_REDIRECT: &str = "/?authRequired=true";
pub const ACCESS_DENIED_REDIRECT: &str = "/?accessDenied=true";

/// Access flags a route declares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteAccess {
    pub requires_auth: bool,
    /// Implies `requires_auth`.
    pub requires_admin: bool,
}

impl RouteAccess {
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        requires_admin: false,
    };
    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        requires_admin: false,
    };
    pub const ADMIN: Self = Self {
        requires_auth: true,
        requires_admin: true,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

pub fn evaluate<S: KeyValueStore>(access: RouteAccess, session: &SessionStore<S>) -> Navigation {
    if !access.requires_auth && !access.requires_admin {
        return Navigation::Proceed;
    }
    if !session.is_authenticated() {
        return Navigation::Redirect(AUTH_REQUIRED_REDIRECT);
    }
    if access.requires_admin {
        let is_admin = session.current_user().is_some_and(|user| user.role == Role::Admin);
        if !is_admin {
            return Navigation::Redirect(ACCESS_DENIED_REDIRECT);
        }
    }
    Navigation::Proceed
}

/// Redirect away from the current route whenever the browser session does not
/// satisfy `access`. Returns whether the page may render right now.
pub fn install_route_guard<F>(access: RouteAccess, navigate: F) -> bool
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let allowed = evaluate(access, &SessionStore::new(BrowserStorage)) == Navigation::Proceed;
    Effect::new(move || {
        if let Navigation::Redirect(target) = evaluate(access, &SessionStore::new(BrowserStorage)) {
            log::debug!("route guard redirecting to {target}");
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
    allowed
}
