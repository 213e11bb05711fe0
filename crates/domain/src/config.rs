//! Configuration management

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CLIENT_ID, DEFAULT_FRAGNET_HOST, DEFAULT_REFRESH_DEADLINE_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOKEN_URL,
};

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragnetConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub auth: AuthSettings,
}

/// Fragnet server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host and port, e.g. `http://fragnet.squonk.it:8080`
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Token endpoint and user credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_client_id")]
    pub client_id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default = "default_refresh_deadline_secs")]
    pub refresh_deadline_secs: u64,
}

impl FragnetConfig {
    /// Configuration for `host` with default token endpoint and timings.
    #[must_use]
    pub fn new(host: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            server: ServerConfig { host: host.into(), ..ServerConfig::default() },
            auth: AuthSettings::new(username, password),
        }
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }

    #[must_use]
    pub fn refresh_deadline(&self) -> Duration {
        Duration::from_secs(self.auth.refresh_deadline_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), request_timeout_secs: default_request_timeout_secs() }
    }
}

impl AuthSettings {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            token_url: default_token_url(),
            client_id: default_client_id(),
            username: username.into(),
            password: password.into(),
            refresh_deadline_secs: default_refresh_deadline_secs(),
        }
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("refresh_deadline_secs", &self.refresh_deadline_secs)
            .finish()
    }
}

fn default_host() -> String {
    DEFAULT_FRAGNET_HOST.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

const fn default_refresh_deadline_secs() -> u64 {
    DEFAULT_REFRESH_DEADLINE_SECS
}
