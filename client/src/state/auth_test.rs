use super::*;
use crate::net::types::TokenPair;
use crate::state::storage::MemoryStore;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
    assert_eq!(state.role(), Role::Guest);
}

// =============================================================
// Session mirroring
// =============================================================

#[test]
fn from_session_mirrors_stored_profile() {
    let session = SessionStore::new(MemoryStore::new());
    let profile = UserProfile {
        username: "alice".to_owned(),
        role: Role::Artist,
        ..UserProfile::default()
    };
    session.store(
        &TokenPair {
            access: "a".to_owned(),
            refresh: "r".to_owned(),
        },
        &profile,
    );

    let state = AuthState::from_session(&session);
    assert!(state.authenticated);
    assert_eq!(state.user, Some(profile));
    assert_eq!(state.role(), Role::Artist);
}

#[test]
fn from_empty_session_is_default() {
    let session = SessionStore::new(MemoryStore::new());
    assert_eq!(AuthState::from_session(&session), AuthState::default());
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_prefers_full_name() {
    let state = AuthState::signed_in(UserProfile {
        username: "alice".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Martin".to_owned(),
        ..UserProfile::default()
    });
    assert_eq!(state.display_name().as_deref(), Some("Alice Martin"));
}

#[test]
fn display_name_falls_back_to_username() {
    let state = AuthState::signed_in(UserProfile {
        username: "alice".to_owned(),
        ..UserProfile::default()
    });
    assert_eq!(state.display_name().as_deref(), Some("alice"));
}
