//! High-level client combining token management and search
//!
//! ```no_run
//! use fragnet_domain::{FragnetConfig, NeighbourhoodQuery};
//! use fragnet_infra::api::FragnetSearch;
//!
//! # async fn example() -> fragnet_domain::Result<()> {
//! let config = FragnetConfig::new("http://fragnet.squonk.it:8080", "user", "password");
//! let client = FragnetSearch::from_config(&config)?;
//!
//! client.authenticate().await?;
//!
//! let query = NeighbourhoodQuery::new("c1ccc(Nc2nc3ccccc3o2)cc1", 3, 1, 2, 100)
//!     .with_calculations(["LOGP", "SIM_RDKIT_TANIMOTO"]);
//! let result = client.search_neighbourhood(&query).await;
//! println!("{} {}", result.status_code, result.message);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use fragnet_common::auth::{OAuthClient, TokenEndpoint, TokenManager};
use fragnet_common::time::{Clock, SystemClock};
use fragnet_core::AccessTokenProvider;
use fragnet_domain::{
    CalculationInfo, ExpansionQuery, FragnetConfig, FragnetError, NeighbourhoodQuery, Result,
    SearchResult,
};
use serde_json::Value;
use tracing::info;

use super::auth::create_token_manager;
use super::client::SearchClient;

/// Authenticated Fragnet search client
///
/// Owns one token manager and one search client sharing it. Independent
/// instances never share tokens.
pub struct FragnetSearch<E = OAuthClient, C = SystemClock>
where
    E: TokenEndpoint + 'static,
    C: Clock + 'static,
{
    tokens: Arc<TokenManager<E, C>>,
    search: SearchClient,
}

impl FragnetSearch {
    /// Build a client from configuration
    ///
    /// No network call is made until the first authentication or search.
    ///
    /// # Errors
    ///
    /// Returns `FragnetError::Config` if an HTTP client cannot be built
    pub fn from_config(config: &FragnetConfig) -> Result<Self> {
        let tokens = Arc::new(create_token_manager(config)?);
        Self::with_token_manager(&config.server.host, config.request_timeout(), tokens)
    }
}

impl<E, C> FragnetSearch<E, C>
where
    E: TokenEndpoint + 'static,
    C: Clock + 'static,
{
    /// Build a client around an existing token manager
    ///
    /// # Errors
    ///
    /// Returns `FragnetError::Config` if the HTTP client cannot be built
    pub fn with_token_manager(
        host: &str,
        timeout: Duration,
        tokens: Arc<TokenManager<E, C>>,
    ) -> Result<Self> {
        let provider: Arc<dyn AccessTokenProvider> = tokens.clone();
        let search = SearchClient::new(host, timeout, provider)?;
        Ok(Self { tokens, search })
    }

    /// Obtain a token pair with the configured credentials
    ///
    /// # Errors
    ///
    /// Returns `FragnetError::Auth` if the password grant fails
    pub async fn authenticate(&self) -> Result<()> {
        self.tokens.authenticate().await.map_err(|e| FragnetError::Auth(e.to_string()))?;
        info!("Fragnet client authenticated");
        Ok(())
    }

    pub async fn search_neighbourhood(&self, query: &NeighbourhoodQuery) -> SearchResult<Value> {
        self.search.search_neighbourhood(query).await
    }

    pub async fn search_expansion(&self, query: &ExpansionQuery) -> SearchResult<Value> {
        self.search.search_expansion(query).await
    }

    pub async fn search_suppliers(&self) -> SearchResult<Vec<String>> {
        self.search.search_suppliers().await
    }

    pub async fn search_availability(&self, smiles: &str) -> SearchResult<Value> {
        self.search.search_availability(smiles).await
    }

    pub async fn search_calculations(&self) -> SearchResult<Vec<CalculationInfo>> {
        self.search.search_calculations().await
    }

    /// # Errors
    ///
    /// Returns an error if the service does not answer
    pub async fn ping(&self) -> Result<bool> {
        self.search.ping().await
    }

    /// Token manager backing this client
    pub fn token_manager(&self) -> &TokenManager<E, C> {
        &self.tokens
    }

    pub fn search_client(&self) -> &SearchClient {
        &self.search
    }
}
