use crate::core::config::ApiConfig;
use crate::core::errors::ApiError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

const DEFAULT_USER_AGENT: &str = concat!("companycam-rs/", env!("CARGO_PKG_VERSION"));

/// Immutable transport settings from which per-call HTTP clients are spawned.
///
/// Holds the bearer token, default headers and base URL once per top-level
/// client. A fresh `reqwest::blocking::Client` is built for every request
/// cycle and dropped as soon as the response has been read, so no connection
/// state is ever shared between calls; concurrent callers each get their own
/// instance. This trades connection reuse for a strict one-request-per-client
/// lifecycle.
pub struct TransportConfig {
    token: Secret<String>,
    base_url: String,
    user_agent: String,
}

impl std::fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl TransportConfig {
    /// Build transport settings from a client configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            token: Secret::new(config.token().to_string()),
            base_url: config.effective_server_url().trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a resolved path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn default_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token.expose_secret()))
            .map_err(|e| ApiError::Configuration(format!("Invalid access token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }

    /// Produce a fresh, ready-to-use HTTP client for a single request cycle.
    pub fn spawn(&self) -> Result<Client, ApiError> {
        Client::builder()
            .default_headers(self.default_headers()?)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| ApiError::Configuration(format!("Failed to build HTTP client: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> TransportConfig {
        TransportConfig::new(&ApiConfig::new("tok_123").server_url("http://localhost:4010/"))
    }

    #[test]
    fn test_endpoint_join_trims_trailing_slash() {
        assert_eq!(
            transport().endpoint("/projects/1"),
            "http://localhost:4010/projects/1"
        );
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let repr = format!("{:?}", transport());
        assert!(!repr.contains("tok_123"));
    }

    #[test]
    fn test_spawn_builds_fresh_client() {
        let transport = transport();
        assert!(transport.spawn().is_ok());
        // two spawns must both succeed independently
        assert!(transport.spawn().is_ok());
    }
}
