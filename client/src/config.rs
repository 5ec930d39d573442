//! Backend location.
//!
//! The browser build has no runtime environment, so the base URL is baked in
//! at compile time from `SOUNDMAP_API_BASE_URL`. Native consumers pass their
//! own value to [`ApiConfig::new`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Trailing slashes are dropped so endpoint joins never double them.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn from_build_env() -> Self {
        option_env!("SOUNDMAP_API_BASE_URL").map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API-relative path such as `auth/login/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
