use super::*;
use crate::net::transport::{ApiResponse, Method, TransportError};
use crate::state::storage::MemoryStore;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

// =============================================================
// Scripted transport
// =============================================================

struct MockTransport {
    responses: Mutex<Vec<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    fn new(responses: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("mock mutex should lock").clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().expect("mock mutex should lock").push(request);
        let mut responses = self.responses.lock().expect("mock mutex should lock");
        if responses.is_empty() {
            Ok(ApiResponse::new(500, ""))
        } else {
            responses.remove(0)
        }
    }
}

fn ok(status: u16, body: serde_json::Value) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse::new(status, body.to_string()))
}

fn raw(status: u16, body: &str) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse::new(status, body))
}

fn client(responses: Vec<Result<ApiResponse, TransportError>>) -> AuthClient<MockTransport, MemoryStore> {
    AuthClient::new(
        ApiConfig::new("http://api.test/api"),
        MockTransport::new(responses),
        MemoryStore::new(),
    )
}

fn credentials() -> LoginCredentials {
    LoginCredentials::new("alice", "secret")
}

fn tokens_body() -> serde_json::Value {
    json!({"access": "acc-123", "refresh": "ref-456"})
}

fn detailed_body(role: &str) -> serde_json::Value {
    json!({
        "id": 9,
        "favorite_genres": "Rock, Jazz",
        "birth_date": null,
        "role": role,
        "user": {
            "id": 4,
            "username": "alice",
            "email": "alice@example.com",
            "first_name": "Alice",
            "last_name": "Martin"
        }
    })
}

fn store_role(client: &AuthClient<MockTransport, MemoryStore>, role: Role) {
    let tokens = TokenPair {
        access: "a".to_owned(),
        refresh: "r".to_owned(),
    };
    let profile = UserProfile {
        username: "u".to_owned(),
        role,
        ..UserProfile::default()
    };
    client.session().store(&tokens, &profile);
}

// =============================================================
// register
// =============================================================

#[tokio::test]
async fn register_posts_payload_and_returns_profile() {
    let client = client(vec![ok(
        201,
        json!({"id": 1, "username": "bob", "email": "bob@example.com", "first_name": "", "last_name": "", "role": "listener", "birth_date": null, "favorite_genres": ""}),
    )]);

    let profile = client
        .register(&Registration::new("bob", "bob@example.com", "pw"))
        .await
        .unwrap();

    assert_eq!(profile.username, "bob");
    assert_eq!(profile.role, Role::Listener);
    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://api.test/api/auth/register/");
    assert_eq!(requests[0].bearer, None);
    assert_eq!(
        requests[0].body,
        Some(json!({"username": "bob", "email": "bob@example.com", "password": "pw"}))
    );
}

#[tokio::test]
async fn register_failure_carries_parsed_error_body() {
    let client = client(vec![ok(400, json!({"username": ["A user with that username already exists."]}))]);

    let err = client
        .register(&Registration::new("bob", "bob@example.com", "pw"))
        .await
        .unwrap_err();

    match err {
        AuthError::Registration(FailureCause::Body { status, payload }) => {
            assert_eq!(status, 400);
            assert_eq!(payload["username"][0], "A user with that username already exists.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn register_failure_with_unparsable_body_carries_status() {
    let client = client(vec![raw(502, "<html>Bad Gateway</html>")]);

    let err = client
        .register(&Registration::new("bob", "bob@example.com", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Registration(FailureCause::Status(502))));
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn register_does_not_touch_session() {
    let client = client(vec![ok(201, json!({"username": "bob", "role": "artist"}))]);
    client
        .register(&Registration::new("bob", "bob@example.com", "pw"))
        .await
        .unwrap();
    assert!(client.session().storage().is_empty());
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_returns_token_pair() {
    let client = client(vec![ok(200, tokens_body())]);

    let tokens = client.login(&credentials()).await.unwrap();

    assert_eq!(tokens.access, "acc-123");
    assert_eq!(tokens.refresh, "ref-456");
    let requests = client.transport().requests();
    assert_eq!(requests[0].url, "http://api.test/api/auth/login/");
    assert_eq!(requests[0].body, Some(json!({"username": "alice", "password": "secret"})));
}

#[tokio::test]
async fn login_failure_carries_detail_payload() {
    let client = client(vec![ok(
        401,
        json!({"detail": "No active account found with the given credentials"}),
    )]);

    let err = client.login(&credentials()).await.unwrap_err();

    let AuthError::Login(FailureCause::Body { status, payload }) = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(*status, 401);
    assert_eq!(payload["detail"], "No active account found with the given credentials");
    assert!(err.to_string().starts_with("login failed: HTTP 401"));
}

#[tokio::test]
async fn login_failure_with_empty_body_carries_status() {
    let client = client(vec![raw(500, "")]);
    let err = client.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::Login(FailureCause::Status(500))));
}

#[tokio::test]
async fn login_transport_failure_propagates() {
    let client = client(vec![Err(TransportError::new("connection refused"))]);
    let err = client.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::Login(FailureCause::Transport(_))));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn login_success_with_malformed_body_is_an_error() {
    let client = client(vec![ok(200, json!({"token": "nope"}))]);
    let err = client.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::Login(FailureCause::Json(_))));
}

// =============================================================
// profile fetches
// =============================================================

#[tokio::test]
async fn fetch_profile_sends_bearer_token() {
    let client = client(vec![ok(200, json!({"username": "alice", "email": "alice@example.com", "role": "admin"}))]);

    let profile = client.fetch_profile("acc-123").await.unwrap();

    assert_eq!(profile.role, Role::Admin);
    let requests = client.transport().requests();
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, "http://api.test/api/users/me/");
    assert_eq!(requests[0].authorization().as_deref(), Some("Bearer acc-123"));
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn fetch_profile_failure_carries_status_only() {
    let client = client(vec![ok(401, json!({"detail": "Given token not valid"}))]);
    let err = client.fetch_profile("stale").await.unwrap_err();
    assert!(matches!(err, AuthError::ProfileFetch(FailureCause::Status(401))));
}

#[tokio::test]
async fn fetch_detailed_profile_normalizes_nested_shape() {
    let client = client(vec![ok(200, detailed_body("artist"))]);

    let profile = client.fetch_detailed_profile("acc-123").await.unwrap();

    assert_eq!(profile.id, Some(9));
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.first_name, "Alice");
    assert_eq!(profile.last_name, "Martin");
    assert_eq!(profile.role, Role::Artist);
    assert_eq!(profile.favorite_genres.as_deref(), Some("Rock, Jazz"));
    let requests = client.transport().requests();
    assert_eq!(requests[0].url, "http://api.test/api/auth/profile/");
    assert_eq!(requests[0].bearer.as_deref(), Some("acc-123"));
}

#[tokio::test]
async fn fetch_detailed_profile_failure_carries_status() {
    let client = client(vec![raw(403, "")]);
    let err = client.fetch_detailed_profile("acc").await.unwrap_err();
    assert!(matches!(err, AuthError::DetailedProfileFetch(FailureCause::Status(403))));
}

#[tokio::test]
async fn fetch_detailed_profile_rejects_flat_shape() {
    let client = client(vec![ok(200, json!({"username": "alice", "role": "artist"}))]);
    let err = client.fetch_detailed_profile("acc").await.unwrap_err();
    assert!(matches!(err, AuthError::DetailedProfileFetch(FailureCause::Json(_))));
}

// =============================================================
// complete_login
// =============================================================

#[tokio::test]
async fn complete_login_stores_tokens_and_flat_profile() {
    let client = client(vec![ok(200, tokens_body()), ok(200, detailed_body("listener"))]);

    let outcome = client.complete_login(&credentials()).await.unwrap();

    assert_eq!(outcome.tokens.access, "acc-123");
    assert_eq!(outcome.profile.username, "alice");
    let session = client.session();
    assert!(session.is_authenticated());
    assert_eq!(session.access_token().as_deref(), Some("acc-123"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref-456"));
    assert_eq!(session.current_user(), Some(outcome.profile));

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].bearer.as_deref(), Some("acc-123"));
}

#[tokio::test]
async fn complete_login_profile_failure_persists_nothing() {
    let client = client(vec![ok(200, tokens_body()), raw(500, "")]);

    let err = client.complete_login(&credentials()).await.unwrap_err();

    assert!(matches!(err, AuthError::DetailedProfileFetch(FailureCause::Status(500))));
    assert!(client.session().storage().is_empty());
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn complete_login_login_failure_skips_profile_fetch() {
    let client = client(vec![ok(401, json!({"detail": "bad credentials"}))]);

    let err = client.complete_login(&credentials()).await.unwrap_err();

    assert!(matches!(err, AuthError::Login(_)));
    assert_eq!(client.transport().requests().len(), 1);
    assert!(client.session().storage().is_empty());
}

#[tokio::test]
async fn logout_clears_session() {
    let client = client(vec![ok(200, tokens_body()), ok(200, detailed_body("admin"))]);
    client.complete_login(&credentials()).await.unwrap();

    client.logout();

    assert!(!client.session().is_authenticated());
    assert_eq!(client.session().current_user(), None);
}

// =============================================================
// resolve_role_based_url
// =============================================================

#[test]
fn role_scoped_endpoint_uses_artist_path_for_artists() {
    let client = client(Vec::new());
    store_role(&client, Role::Artist);
    assert_eq!(
        client.resolve_role_based_url("popular-genres-region-age"),
        "http://api.test/api/music/artists/popular-genres-region-age/"
    );
}

#[test]
fn role_scoped_endpoint_uses_listener_path_for_other_roles() {
    for role in [Role::Listener, Role::Admin, Role::Other("moderator".to_owned())] {
        let client = client(Vec::new());
        store_role(&client, role);
        assert_eq!(
            client.resolve_role_based_url("popular-genres-region-age"),
            "http://api.test/api/music/listeners/popular-genres-region-age/"
        );
    }
}

#[test]
fn role_scoped_endpoint_uses_listener_path_without_user() {
    let client = client(Vec::new());
    assert_eq!(
        client.resolve_role_based_url("popular-genres-region-age"),
        "http://api.test/api/music/listeners/popular-genres-region-age/"
    );
}

#[test]
fn other_endpoints_resolve_to_generic_path() {
    let client = client(Vec::new());
    store_role(&client, Role::Artist);
    assert_eq!(
        client.resolve_role_based_url("user-statistics"),
        "http://api.test/api/user-statistics/"
    );
    assert!(client.transport().requests().is_empty());
}
