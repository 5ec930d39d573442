use super::*;
use client::net::types::{Role, TokenPair, UserProfile};
use client::state::session::SessionStore;

fn store_in(dir: &tempfile::TempDir) -> FileStore {
    FileStore::new(dir.path().join("nested").join("session.json"))
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.get("accessToken"), None);
    assert!(!store.path().exists());
}

#[test]
fn set_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.set("accessToken", "abc");
    assert!(store.path().exists());
    assert_eq!(store.get("accessToken").as_deref(), Some("abc"));
}

#[test]
fn values_persist_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    store_in(&dir).set("refreshToken", "r-1");
    assert_eq!(store_in(&dir).get("refreshToken").as_deref(), Some("r-1"));
}

#[test]
fn remove_missing_key_does_not_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.remove("user");
    assert!(!store.path().exists());
}

#[test]
fn malformed_file_reads_as_empty_and_is_replaced_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("session.json"));
    fs::write(store.path(), "[1, 2").unwrap();
    assert_eq!(store.get("accessToken"), None);

    store.set("accessToken", "fresh");
    assert_eq!(store.get("accessToken").as_deref(), Some("fresh"));
}

#[test]
fn session_store_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let session = SessionStore::new(store_in(&dir));
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

    let reopened = SessionStore::new(store_in(&dir));
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.current_user(), Some(profile));

    reopened.clear();
    assert!(!SessionStore::new(store_in(&dir)).is_authenticated());
}
