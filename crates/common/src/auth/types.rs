//! Token endpoint types and structures
//!
//! Defines the token pair held by the token manager, the grants used to
//! obtain it, and the wire format of the token endpoint response.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::client::TokenEndpointError;

/// Token endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    /// Full token endpoint URL
    pub token_url: String,

    /// OAuth client ID sent with every grant
    pub client_id: String,

    /// Timeout applied to each token request
    pub request_timeout: Duration,
}

impl OAuthConfig {
    /// Create a new token endpoint configuration
    #[must_use]
    pub fn new(token_url: String, client_id: String, request_timeout: Duration) -> Self {
        Self { token_url, client_id, request_timeout }
    }
}

/// User credentials for the password grant
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Grant presented to the token endpoint
#[derive(Clone, PartialEq, Eq)]
pub enum TokenGrant {
    /// Exchange username and password for a new token pair
    Password { username: String, password: String },

    /// Exchange a refresh token for a new token pair
    RefreshToken(String),
}

impl TokenGrant {
    #[must_use]
    pub fn password(credentials: &Credentials) -> Self {
        Self::Password {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }

    /// The `grant_type` value, also used as a log label
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Password { .. } => "password",
            Self::RefreshToken(_) => "refresh_token",
        }
    }

    /// Form-encoded body fields for this grant
    #[must_use]
    pub fn form_params(&self, client_id: &str) -> Vec<(&'static str, String)> {
        let mut params =
            vec![("grant_type", self.kind().to_string()), ("client_id", client_id.to_string())];

        match self {
            Self::Password { username, password } => {
                params.push(("username", username.clone()));
                params.push(("password", password.clone()));
            }
            Self::RefreshToken(token) => params.push(("refresh_token", token.clone())),
        }

        params
    }
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::RefreshToken(_) => f.debug_tuple("RefreshToken").field(&"<redacted>").finish(),
        }
    }
}

/// Token endpoint response body
///
/// `access_token`, `expires_in` and `refresh_token` are required; a body
/// without any of them fails to deserialize. A missing `refresh_expires_in`
/// means the refresh token does not expire.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_expires_in: Option<i64>,
}

impl TokenResponse {
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        expires_in: i64,
        refresh_token: impl Into<String>,
        refresh_expires_in: Option<i64>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            expires_in,
            refresh_token: refresh_token.into(),
            refresh_expires_in,
        }
    }

    /// Parse a raw response body
    ///
    /// # Errors
    /// Returns `MalformedResponse` if the body is not JSON or lacks a
    /// required field.
    pub fn from_slice(body: &[u8]) -> Result<Self, TokenEndpointError> {
        serde_json::from_slice(body).map_err(|e| TokenEndpointError::MalformedResponse(e.to_string()))
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &"<redacted>")
            .field("refresh_expires_in", &self.refresh_expires_in)
            .finish()
    }
}

/// Access and refresh token pair with absolute expiry times
///
/// Always built whole from a [`TokenResponse`]; the token manager replaces it
/// as a unit and never edits a field in place.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSet {
    pub access_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_token: String,
    /// `None` when the server gave the refresh token no expiry
    pub refresh_expires_at: Option<DateTime<Utc>>,
}

impl TokenSet {
    /// Build a token pair from a response received at `issued_at`
    ///
    /// # Errors
    /// Returns `MalformedResponse` if a lifetime cannot be represented as a
    /// timestamp.
    pub fn from_response(
        response: TokenResponse,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, TokenEndpointError> {
        let access_expires_at = expiry_after(issued_at, response.expires_in, "expires_in")?;
        let refresh_expires_at = response
            .refresh_expires_in
            .map(|secs| expiry_after(issued_at, secs, "refresh_expires_in"))
            .transpose()?;

        Ok(Self {
            access_token: response.access_token,
            access_expires_at,
            refresh_token: response.refresh_token,
            refresh_expires_at,
        })
    }

    /// Remaining access token life; negative once expired
    #[must_use]
    pub fn access_remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        self.access_expires_at - now
    }

    /// Remaining refresh token life, or `None` if it never expires
    #[must_use]
    pub fn refresh_remaining(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.refresh_expires_at.map(|expires_at| expires_at - now)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("access_token", &"<redacted>")
            .field("access_expires_at", &self.access_expires_at)
            .field("refresh_token", &"<redacted>")
            .field("refresh_expires_at", &self.refresh_expires_at)
            .finish()
    }
}

fn expiry_after(
    issued_at: DateTime<Utc>,
    seconds: i64,
    field: &str,
) -> Result<DateTime<Utc>, TokenEndpointError> {
    TimeDelta::try_seconds(seconds)
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .ok_or_else(|| {
            TokenEndpointError::MalformedResponse(format!("{field} out of range: {seconds}"))
        })
}

#[cfg(test)]
mod tests {
    //! Unit tests for auth::types.
    use super::*;

    fn issued_at() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn password_grant_form_fields() {
        let grant = TokenGrant::password(&Credentials::new("alice", "s3cret"));
        let params = grant.form_params("fragnet-search");

        assert_eq!(
            params,
            vec![
                ("grant_type", "password".to_string()),
                ("client_id", "fragnet-search".to_string()),
                ("username", "alice".to_string()),
                ("password", "s3cret".to_string()),
            ]
        );
    }

    #[test]
    fn refresh_grant_form_fields() {
        let grant = TokenGrant::RefreshToken("R1".to_string());
        let params = grant.form_params("fragnet-search");

        assert_eq!(
            params,
            vec![
                ("grant_type", "refresh_token".to_string()),
                ("client_id", "fragnet-search".to_string()),
                ("refresh_token", "R1".to_string()),
            ]
        );
    }

    #[test]
    fn debug_output_hides_secrets() {
        let grant = TokenGrant::password(&Credentials::new("alice", "s3cret"));
        assert!(!format!("{grant:?}").contains("s3cret"));

        let tokens =
            TokenSet::from_response(TokenResponse::new("A1", 50, "R1", None), issued_at()).unwrap();
        let debug = format!("{tokens:?}");
        assert!(!debug.contains("A1"));
        assert!(!debug.contains("R1"));
    }

    #[test]
    fn response_requires_access_expiry_and_refresh_fields() {
        for body in [
            r#"{"expires_in": 50, "refresh_token": "R1"}"#,
            r#"{"access_token": "A1", "refresh_token": "R1"}"#,
            r#"{"access_token": "A1", "expires_in": 50}"#,
            "not json",
        ] {
            let result = TokenResponse::from_slice(body.as_bytes());
            assert!(
                matches!(result, Err(TokenEndpointError::MalformedResponse(_))),
                "body {body} should be malformed"
            );
        }
    }

    #[test]
    fn refresh_expiry_is_optional() {
        let response =
            TokenResponse::from_slice(br#"{"access_token":"A1","expires_in":50,"refresh_token":"R1"}"#)
                .unwrap();
        assert_eq!(response.refresh_expires_in, None);

        let tokens = TokenSet::from_response(response, issued_at()).unwrap();
        assert_eq!(tokens.refresh_expires_at, None);
        assert_eq!(tokens.refresh_remaining(issued_at()), None);
    }

    #[test]
    fn expiry_is_relative_to_issue_time() {
        let tokens =
            TokenSet::from_response(TokenResponse::new("A1", 50, "R1", Some(3600)), issued_at())
                .unwrap();

        assert_eq!(tokens.access_remaining(issued_at()), TimeDelta::seconds(50));
        assert_eq!(tokens.refresh_remaining(issued_at()), Some(TimeDelta::seconds(3600)));

        let later = issued_at() + TimeDelta::seconds(60);
        assert_eq!(tokens.access_remaining(later), TimeDelta::seconds(-10));
    }

    #[test]
    fn unrepresentable_lifetime_is_malformed() {
        let result =
            TokenSet::from_response(TokenResponse::new("A1", i64::MAX, "R1", None), issued_at());
        assert!(matches!(result, Err(TokenEndpointError::MalformedResponse(_))));
    }
}
