//! Wire DTOs for the authentication REST API.
//!
//! DESIGN
//! ======
//! The backend returns user profiles in two shapes: a flat one (register,
//! `/users/me/`) and a nested one (`/auth/profile/`, a profile object wrapping
//! a `user` object). Both are modelled explicitly and the nested shape is
//! normalized into [`UserProfile`] before anything is stored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Privilege tier of a user.
///
/// Serialized as the plain lowercase string the backend uses. Unknown strings
/// are kept verbatim in [`Role::Other`] so stored profiles round-trip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Listener,
    Artist,
    Admin,
    /// No profile is known for the current session.
    #[default]
    Guest,
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Listener => "listener",
            Self::Artist => "artist",
            Self::Admin => "admin",
            Self::Guest => "guest",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            "listener" => Self::Listener,
            "artist" => Self::Artist,
            "admin" => Self::Admin,
            // An empty role is what the backend sends for a profile without one.
            "guest" | "" => Self::Guest,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login payload for `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Registration payload for `POST /auth/register/`.
///
/// Only `username`, `email` and `password` are required by the backend; the
/// optional profile extras are left out of the body when unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Free-form comma separated list, e.g. `"Rock, Jazz"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Registration {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            first_name: None,
            last_name: None,
            birth_date: None,
            favorite_genres: None,
            role: None,
        }
    }
}

/// Token pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Flat user profile. The only shape ever written to the session store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_genres: Option<String>,
}

/// Identity sub-object of the detailed profile response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Detailed profile as returned by `GET /auth/profile/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedProfile {
    /// Profile identifier (not the inner user id).
    #[serde(default)]
    pub id: Option<i64>,
    pub user: NestedUser,
    #[serde(default)]
    pub favorite_genres: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl NestedProfile {
    /// Flatten into a [`UserProfile`]: role, genres, birth date and id come
    /// from the outer object, identity fields from `user`.
    #[must_use]
    pub fn into_flat(self) -> UserProfile {
        let NestedProfile {
            id,
            user,
            favorite_genres,
            birth_date,
            role,
        } = self;
        UserProfile {
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date,
            role,
            id,
            favorite_genres,
        }
    }
}

impl From<NestedProfile> for UserProfile {
    fn from(nested: NestedProfile) -> Self {
        nested.into_flat()
    }
}

/// A profile payload tagged with the shape its endpoint returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileShape {
    Flat(UserProfile),
    Nested(NestedProfile),
}

impl ProfileShape {
    #[must_use]
    pub fn normalize(self) -> UserProfile {
        match self {
            Self::Flat(profile) => profile,
            Self::Nested(nested) => nested.into_flat(),
        }
    }
}

/// Result of the composed login flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub tokens: TokenPair,
    pub profile: UserProfile,
}
