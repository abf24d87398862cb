use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};
use std::env;
use std::fmt;

/// API versions this crate supports. The server only documents v2 today; the
/// enum keeps the supported set closed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    #[default]
    V2,
}

impl ApiVersion {
    /// Default server URL for this version.
    pub fn server_url(self) -> &'static str {
        match self {
            Self::V2 => crate::v2::defaults::SERVER_URL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client configuration: access token, API version and an optional server
/// URL override (e.g. for tests).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub token: Secret<String>,
    pub version: ApiVersion,
    pub server_url: Option<String>,
}

// Custom Serialize implementation - never expose the token in serialization
impl Serialize for ApiConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ApiConfig", 3)?;
        state.serialize_field("token", "[REDACTED]")?;
        state.serialize_field("version", self.version.as_str())?;
        state.serialize_field("server_url", &self.server_url)?;
        state.end()
    }
}

impl ApiConfig {
    /// Create a new configuration with an access token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Secret::new(token.into()),
            version: ApiVersion::default(),
            server_url: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Expected environment variables:
    /// - `COMPANYCAM_TOKEN`
    /// - `COMPANYCAM_SERVER_URL` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var("COMPANYCAM_TOKEN")
            .map_err(|_| ConfigError::MissingEnvironmentVariable("COMPANYCAM_TOKEN".to_string()))?;
        let server_url = env::var("COMPANYCAM_SERVER_URL").ok();

        Ok(Self {
            token: Secret::new(token),
            version: ApiVersion::default(),
            server_url,
        })
    }

    /// Create configuration from a .env file and environment variables.
    ///
    /// Loads `.env` from the working directory if it exists, then reads the
    /// standard environment variable names.
    #[cfg(feature = "env-file")]
    pub fn from_env_file() -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(".env")
    }

    /// Create configuration from a specific .env file path.
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(_) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // .env file doesn't exist, continue with system env vars
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env()
    }

    /// Select an API version.
    #[must_use]
    pub const fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Override the server URL.
    #[must_use]
    pub fn server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = Some(server_url.into());
        self
    }

    /// Get the access token (use carefully - exposes the secret).
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// The server URL to use: the override if set, else the version default.
    pub fn effective_server_url(&self) -> &str {
        self.server_url
            .as_deref()
            .unwrap_or_else(|| self.version.server_url())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
