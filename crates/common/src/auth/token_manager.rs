//! Token manager with lazy refresh
//!
//! Holds one access/refresh token pair and hands out an access token that is
//! good for at least the refresh deadline:
//! - Access token still fresh: returned as is, no network call
//! - Access token stale, refresh token fresh: refresh grant
//! - Both stale: new password grant
//!
//! Decision and acquisition run under a single lock, so concurrent callers
//! never race each other into duplicate grants. There is no background task;
//! refresh only happens when a caller asks for a token.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::client::TokenEndpointError;
use super::traits::TokenEndpoint;
use super::types::{Credentials, TokenGrant, TokenSet};
use crate::time::{Clock, SystemClock};

/// Error type for token manager operations
#[derive(Debug, Error)]
pub enum TokenManagerError {
    /// Password grant failed
    #[error("authentication failed: {0}")]
    AuthenticationFailed(#[source] TokenEndpointError),

    /// Refresh or re-authentication of an existing token pair failed
    #[error("token refresh failed: {0}")]
    RefreshFailed(#[source] TokenEndpointError),
}

/// What `ensure_valid_token` has to do for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenAction {
    /// Current access token has at least the deadline left
    UseCurrent(String),
    /// No tokens held yet
    Authenticate,
    /// Access token stale; carries the usable refresh token
    Refresh(String),
    /// Both tokens stale
    Reauthenticate,
}

/// Decide how to obtain a usable access token
///
/// A refresh token without an expiry is always usable.
#[must_use]
pub fn plan(tokens: Option<&TokenSet>, now: DateTime<Utc>, deadline: TimeDelta) -> TokenAction {
    let Some(tokens) = tokens else {
        return TokenAction::Authenticate;
    };

    if tokens.access_remaining(now) >= deadline {
        return TokenAction::UseCurrent(tokens.access_token.clone());
    }

    match tokens.refresh_remaining(now) {
        Some(remaining) if remaining < deadline => TokenAction::Reauthenticate,
        _ => TokenAction::Refresh(tokens.refresh_token.clone()),
    }
}

/// Token manager for the password and refresh grants
pub struct TokenManager<E: TokenEndpoint, C: Clock = SystemClock> {
    endpoint: E,
    credentials: Credentials,
    refresh_deadline: Duration,
    clock: C,
    current_tokens: Mutex<Option<TokenSet>>,
}

impl<E: TokenEndpoint> TokenManager<E, SystemClock> {
    /// Create a token manager on the system clock
    ///
    /// # Arguments
    /// * `endpoint` - Token endpoint used for every grant
    /// * `credentials` - Username and password for the password grant
    /// * `refresh_deadline` - Minimum remaining life of a returned access
    ///   token
    #[must_use]
    pub fn new(endpoint: E, credentials: Credentials, refresh_deadline: Duration) -> Self {
        Self::with_clock(endpoint, credentials, refresh_deadline, SystemClock)
    }
}

impl<E: TokenEndpoint, C: Clock> TokenManager<E, C> {
    /// Create a token manager on a custom clock
    #[must_use]
    pub fn with_clock(
        endpoint: E,
        credentials: Credentials,
        refresh_deadline: Duration,
        clock: C,
    ) -> Self {
        Self { endpoint, credentials, refresh_deadline, clock, current_tokens: Mutex::new(None) }
    }

    /// Obtain a fresh token pair with the password grant
    ///
    /// Replaces any tokens already held. On failure the previous state is
    /// kept.
    ///
    /// # Errors
    /// Returns `AuthenticationFailed` if the endpoint refuses the grant or
    /// cannot be reached.
    pub async fn authenticate(&self) -> Result<(), TokenManagerError> {
        let mut tokens = self.current_tokens.lock().await;
        self.acquire(&TokenGrant::password(&self.credentials), &mut tokens)
            .await
            .map_err(TokenManagerError::AuthenticationFailed)?;

        info!(username = %self.credentials.username, "Authenticated with token endpoint");
        Ok(())
    }

    /// Get an access token valid for at least the refresh deadline
    ///
    /// Authenticates first if no tokens are held, refreshes a stale access
    /// token, and falls back to the password grant when the refresh token is
    /// stale too.
    ///
    /// # Errors
    /// Returns `AuthenticationFailed` when the first authentication fails and
    /// `RefreshFailed` when renewing an existing pair fails. Tokens are left
    /// unchanged on error.
    pub async fn ensure_valid_token(&self) -> Result<String, TokenManagerError> {
        let mut tokens = self.current_tokens.lock().await;
        let action = plan(tokens.as_ref(), self.clock.now(), self.deadline());

        match action {
            TokenAction::UseCurrent(access_token) => {
                debug!("Access token still valid");
                Ok(access_token)
            }
            TokenAction::Authenticate => {
                let grant = TokenGrant::password(&self.credentials);
                let access_token = self
                    .acquire(&grant, &mut tokens)
                    .await
                    .map_err(TokenManagerError::AuthenticationFailed)?;
                info!("Authenticated on first use");
                Ok(access_token)
            }
            TokenAction::Refresh(refresh_token) => {
                let access_token = self
                    .acquire(&TokenGrant::RefreshToken(refresh_token), &mut tokens)
                    .await
                    .map_err(TokenManagerError::RefreshFailed)?;
                info!("Refreshed access token");
                Ok(access_token)
            }
            TokenAction::Reauthenticate => {
                let grant = TokenGrant::password(&self.credentials);
                let access_token = self
                    .acquire(&grant, &mut tokens)
                    .await
                    .map_err(TokenManagerError::RefreshFailed)?;
                info!("Refresh token expired, re-authenticated");
                Ok(access_token)
            }
        }
    }

    /// Snapshot of the held tokens
    pub async fn current_tokens(&self) -> Option<TokenSet> {
        self.current_tokens.lock().await.clone()
    }

    /// Check if a token pair is held
    pub async fn is_authenticated(&self) -> bool {
        self.current_tokens.lock().await.is_some()
    }

    /// Seconds of access token life left, or `None` if not authenticated
    pub async fn seconds_until_expiry(&self) -> Option<i64> {
        let now = self.clock.now();
        self.current_tokens.lock().await.as_ref().map(|t| t.access_remaining(now).num_seconds())
    }

    /// Minimum remaining life of a returned access token
    #[must_use]
    pub fn refresh_deadline(&self) -> Duration {
        self.refresh_deadline
    }

    fn deadline(&self) -> TimeDelta {
        TimeDelta::from_std(self.refresh_deadline).unwrap_or(TimeDelta::MAX)
    }

    /// Present a grant and replace `slot` with the new pair on success
    async fn acquire(
        &self,
        grant: &TokenGrant,
        slot: &mut Option<TokenSet>,
    ) -> Result<String, TokenEndpointError> {
        debug!(grant = grant.kind(), "Requesting tokens");

        let response = self
            .endpoint
            .request_token(grant)
            .await
            .inspect_err(|e| warn!(grant = grant.kind(), error = %e, "Token request failed"))?;
        let tokens = TokenSet::from_response(response, self.clock.now())?;

        debug!(
            access_expires_at = %tokens.access_expires_at,
            refresh_expires_at = ?tokens.refresh_expires_at,
            "Token pair replaced"
        );

        let access_token = tokens.access_token.clone();
        *slot = Some(tokens);
        Ok(access_token)
    }
}
