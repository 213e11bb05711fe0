//! Mock implementations for testing
//!
//! Provides an in-memory token endpoint that replays scripted responses and
//! records every grant it receives.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::auth::{TokenEndpoint, TokenEndpointError, TokenGrant, TokenResponse};

#[derive(Debug, Default)]
struct EndpointState {
    grants: Vec<TokenGrant>,
    scripted: VecDeque<Result<TokenResponse, TokenEndpointError>>,
    fallback: Option<TokenResponse>,
}

/// Scripted token endpoint
///
/// Responses queued with [`respond_with`](Self::respond_with) and
/// [`fail_with`](Self::fail_with) are returned in order. Once the queue is
/// empty the fallback response is used, if set; otherwise the call fails with
/// a network error. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockTokenEndpoint {
    state: Arc<Mutex<EndpointState>>,
}

impl MockTokenEndpoint {
    /// Create a mock endpoint with nothing scripted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn respond_with(&self, response: TokenResponse) {
        self.state.lock().scripted.push_back(Ok(response));
    }

    /// Queue a failure
    pub fn fail_with(&self, error: TokenEndpointError) {
        self.state.lock().scripted.push_back(Err(error));
    }

    /// Response returned once the queue runs dry
    pub fn set_fallback(&self, response: TokenResponse) {
        self.state.lock().fallback = Some(response);
    }

    /// Grants received so far, oldest first
    #[must_use]
    pub fn grants(&self) -> Vec<TokenGrant> {
        self.state.lock().grants.clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.lock().grants.len()
    }

    #[must_use]
    pub fn password_grants(&self) -> usize {
        self.count_where(|grant| matches!(grant, TokenGrant::Password { .. }))
    }

    #[must_use]
    pub fn refresh_grants(&self) -> usize {
        self.count_where(|grant| matches!(grant, TokenGrant::RefreshToken(_)))
    }

    /// Forget recorded grants and scripted responses
    pub fn reset(&self) {
        *self.state.lock() = EndpointState::default();
    }

    fn count_where(&self, predicate: impl Fn(&TokenGrant) -> bool) -> usize {
        self.state.lock().grants.iter().filter(|grant| predicate(grant)).count()
    }
}

#[async_trait]
impl TokenEndpoint for MockTokenEndpoint {
    async fn request_token(
        &self,
        grant: &TokenGrant,
    ) -> Result<TokenResponse, TokenEndpointError> {
        let mut state = self.state.lock();
        state.grants.push(grant.clone());

        match state.scripted.pop_front() {
            Some(result) => result,
            None => state.fallback.clone().ok_or_else(|| {
                TokenEndpointError::Network("mock endpoint has no scripted response".to_string())
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for testing::mocks.
    use super::*;

    #[tokio::test]
    async fn scripted_responses_replay_in_order() {
        let endpoint = MockTokenEndpoint::new();
        endpoint.respond_with(TokenResponse::new("A1", 60, "R1", None));
        endpoint.fail_with(TokenEndpointError::Status(401));

        let grant = TokenGrant::RefreshToken("R0".to_string());
        assert_eq!(endpoint.request_token(&grant).await.unwrap().access_token, "A1");
        assert!(matches!(
            endpoint.request_token(&grant).await,
            Err(TokenEndpointError::Status(401))
        ));
        assert!(matches!(endpoint.request_token(&grant).await, Err(TokenEndpointError::Network(_))));
        assert_eq!(endpoint.refresh_grants(), 3);
    }

    #[tokio::test]
    async fn fallback_used_after_queue_drains() {
        let endpoint = MockTokenEndpoint::new();
        endpoint.set_fallback(TokenResponse::new("F", 60, "RF", None));

        let grant = TokenGrant::Password { username: "u".to_string(), password: "p".to_string() };
        assert_eq!(endpoint.request_token(&grant).await.unwrap().access_token, "F");
        assert_eq!(endpoint.request_token(&grant).await.unwrap().access_token, "F");
        assert_eq!(endpoint.password_grants(), 2);

        endpoint.reset();
        assert_eq!(endpoint.call_count(), 0);
    }
}
