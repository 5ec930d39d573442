//! REST client for the authentication API.
//!
//! Every network operation issues exactly one request through the injected
//! [`Transport`]; [`AuthClient::complete_login`] chains two of them and only
//! then writes the session.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged at the call site and returned to the caller, never
//! swallowed. Register and login errors carry the backend's JSON error body
//! when there is one; profile errors carry the status code.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{AuthError, FailureCause};
use super::transport::{ApiRequest, Transport};
use super::types::{
    LoginCredentials, LoginOutcome, NestedProfile, ProfileShape, Registration, Role, TokenPair,
    UserProfile,
};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;
use crate::state::storage::KeyValueStore;

const REGISTER_PATH: &str = "auth/register/";
const LOGIN_PATH: &str = "auth/login/";
const PROFILE_PATH: &str = "users/me/";
const DETAILED_PROFILE_PATH: &str = "auth/profile/";

/// The one endpoint served separately for artists and listeners.
pub const ROLE_SCOPED_ENDPOINT: &str = "popular-genres-region-age";

/// Whether a failed response body is worth parsing for an error payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ErrorBody {
    Parse,
    Ignore,
}

pub struct AuthClient<T, S> {
    config: ApiConfig,
    transport: T,
    session: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> AuthClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, storage: S) -> Self {
        Self {
            config,
            transport,
            session: SessionStore::new(storage),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Create an account via `POST /auth/register/`.
    ///
    /// # Errors
    ///
    /// [`AuthError::Registration`] on any non-success response or transport failure.
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile, AuthError> {
        let result = async {
            let request = ApiRequest::post(self.config.endpoint(REGISTER_PATH), to_body(registration)?);
            let body = self.exchange(request, ErrorBody::Parse).await?;
            decode::<UserProfile>(&body)
        }
        .await;
        result
            .map_err(AuthError::Registration)
            .inspect_err(|e| log::error!("Registration error: {e}"))
    }

    /// Obtain a token pair via `POST /auth/login/`.
    ///
    /// # Errors
    ///
    /// [`AuthError::Login`] on any non-success response or transport failure.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<TokenPair, AuthError> {
        let result = async {
            let request = ApiRequest::post(self.config.endpoint(LOGIN_PATH), to_body(credentials)?);
            let body = self.exchange(request, ErrorBody::Parse).await?;
            decode::<TokenPair>(&body)
        }
        .await;
        result
            .map_err(AuthError::Login)
            .inspect_err(|e| log::error!("Login error: {e}"))
    }

    /// Basic profile via `GET /users/me/`.
    ///
    /// # Errors
    ///
    /// [`AuthError::ProfileFetch`] on any non-success response or transport failure.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, AuthError> {
        let result = async {
            let request = ApiRequest::get(self.config.endpoint(PROFILE_PATH)).with_bearer(access_token);
            let body = self.exchange(request, ErrorBody::Ignore).await?;
            decode::<UserProfile>(&body).map(|flat| ProfileShape::Flat(flat).normalize())
        }
        .await;
        result
            .map_err(AuthError::ProfileFetch)
            .inspect_err(|e| log::error!("Error fetching user profile: {e}"))
    }

    /// Detailed profile via `GET /auth/profile/`, flattened.
    ///
    /// # Errors
    ///
    /// [`AuthError::DetailedProfileFetch`] on any non-success response,
    /// transport failure, or a body that is not a nested profile.
    pub async fn fetch_detailed_profile(&self, access_token: &str) -> Result<UserProfile, AuthError> {
        let result = async {
            let request =
                ApiRequest::get(self.config.endpoint(DETAILED_PROFILE_PATH)).with_bearer(access_token);
            let body = self.exchange(request, ErrorBody::Ignore).await?;
            decode::<NestedProfile>(&body).map(|nested| ProfileShape::Nested(nested).normalize())
        }
        .await;
        result
            .map_err(AuthError::DetailedProfileFetch)
            .inspect_err(|e| log::error!("Error fetching detailed user profile: {e}"))
    }

    /// Log in, fetch the detailed profile, then persist the session.
    ///
    /// Nothing is stored unless both requests succeed.
    ///
    /// # Errors
    ///
    /// The error of whichever step failed.
    pub async fn complete_login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, AuthError> {
        self.complete_login_steps(credentials)
            .await
            .inspect_err(|e| log::error!("Complete login process failed: {e}"))
    }

    async fn complete_login_steps(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, AuthError> {
        let tokens = self.login(credentials).await?;
        let profile = self.fetch_detailed_profile(&tokens.access).await?;
        self.session.store(&tokens, &profile);
        log::info!("signed in as {} ({})", profile.username, profile.role);
        Ok(LoginOutcome { tokens, profile })
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    /// URL for `endpoint`, scoped by the stored user's role where the backend
    /// splits it. No network access.
    pub fn resolve_role_based_url(&self, endpoint: &str) -> String {
        let role = self.session.current_user_role();
        log::debug!("resolving {endpoint} for role {role}");
        role_based_url(&self.config, &role, endpoint)
    }

    async fn exchange(&self, request: ApiRequest, error_body: ErrorBody) -> Result<String, FailureCause> {
        let resp = self.transport.send(request).await?;
        if resp.is_success() {
            return Ok(resp.body);
        }
        if error_body == ErrorBody::Parse {
            if let Ok(payload) = serde_json::from_str::<serde_json::Value>(&resp.body) {
                return Err(FailureCause::Body {
                    status: resp.status,
                    payload,
                });
            }
        }
        Err(FailureCause::Status(resp.status))
    }
}

/// Artists and listeners get separate paths for [`ROLE_SCOPED_ENDPOINT`];
/// every role other than artist, guest included, reads the listener one.
#[must_use]
pub fn role_based_url(config: &ApiConfig, role: &Role, endpoint: &str) -> String {
    if endpoint == ROLE_SCOPED_ENDPOINT {
        let scope = if *role == Role::Artist { "artists" } else { "listeners" };
        return config.endpoint(&format!("music/{scope}/{endpoint}/"));
    }
    config.endpoint(&format!("{endpoint}/"))
}

fn to_body<B: Serialize>(payload: &B) -> Result<serde_json::Value, FailureCause> {
    serde_json::to_value(payload).map_err(|e| FailureCause::Json(e.to_string()))
}

fn decode<V: DeserializeOwned>(body: &str) -> Result<V, FailureCause> {
    serde_json::from_str(body).map_err(|e| FailureCause::Json(e.to_string()))
}

/// Client wired to the browser: `fetch` transport and `localStorage`.
#[cfg(feature = "csr")]
#[must_use]
pub fn browser_client()
-> AuthClient<super::transport::GlooTransport, crate::state::storage::BrowserStorage> {
    AuthClient::new(
        ApiConfig::from_build_env(),
        super::transport::GlooTransport,
        crate::state::storage::BrowserStorage,
    )
}
