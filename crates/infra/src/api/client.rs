//! Search API client
//!
//! Sends authenticated GET requests to the search service and folds every
//! outcome, including local rejections and transport failures, into a
//! [`SearchResult`].

use std::sync::Arc;
use std::time::Duration;

use fragnet_core::{
    calculation_list, expansion_params, neighbourhood_params, supplier_names, validate_expansion,
    validate_neighbourhood, validate_smiles, AccessTokenProvider, Endpoints,
};
use fragnet_domain::{
    CalculationInfo, ExpansionQuery, FragnetError, NeighbourhoodQuery, Result, SearchOutcome,
    SearchResult,
};
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::errors::InfraError;
use crate::http::{HttpClient, USER_AGENT};

/// Client for the `fragnet-search/rest/v2` endpoints
pub struct SearchClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    endpoints: Endpoints,
}

impl SearchClient {
    /// Create a search client
    ///
    /// # Arguments
    ///
    /// * `host` - Service host, e.g. `http://fragnet.squonk.it:8080`
    /// * `timeout` - Timeout for each search request
    /// * `auth` - Access token provider
    ///
    /// # Errors
    ///
    /// Returns `FragnetError::Config` if the HTTP client cannot be built
    pub fn new(host: &str, timeout: Duration, auth: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).user_agent(USER_AGENT).build()?;

        Ok(Self { http_client, auth, endpoints: Endpoints::new(host) })
    }

    /// URLs this client talks to
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Search the fragment network around a molecule
    ///
    /// Invalid queries are rejected without a token request or network call.
    /// The content is the parsed JSON body, absent if the body is not JSON.
    #[instrument(skip(self, query), fields(hops = query.hops, limit = query.limit))]
    pub async fn search_neighbourhood(&self, query: &NeighbourhoodQuery) -> SearchResult<Value> {
        let calculations = match validate_neighbourhood(query) {
            Ok(calculations) => calculations,
            Err(reason) => {
                info!(%reason, "Rejected neighbourhood query");
                return SearchResult::rejected(reason);
            }
        };

        let params = neighbourhood_params(query, &calculations);
        self.get_json(self.endpoints.neighbourhood(&query.smiles), &params).await
    }

    /// Expand a molecule into the purchasable compounds within `hops` edges
    #[instrument(skip(self, query), fields(hops = query.hops))]
    pub async fn search_expansion(&self, query: &ExpansionQuery) -> SearchResult<Value> {
        if let Err(reason) = validate_expansion(query) {
            info!(%reason, "Rejected expansion query");
            return SearchResult::rejected(reason);
        }

        self.get_json(self.endpoints.expansion(&query.smiles), &expansion_params(query)).await
    }

    /// List supplier names, in server order
    #[instrument(skip(self))]
    pub async fn search_suppliers(&self) -> SearchResult<Vec<String>> {
        self.get_json(self.endpoints.suppliers(), &[]).await.and_then_content(supplier_names)
    }

    /// Look up which suppliers stock a molecule
    #[instrument(skip(self, smiles))]
    pub async fn search_availability(&self, smiles: &str) -> SearchResult<Value> {
        if let Err(reason) = validate_smiles(smiles) {
            info!(%reason, "Rejected availability query");
            return SearchResult::rejected(reason);
        }

        self.get_json(self.endpoints.availability(smiles), &[]).await
    }

    /// List the calculations the server can run
    #[instrument(skip(self))]
    pub async fn search_calculations(&self) -> SearchResult<Vec<CalculationInfo>> {
        self.get_json(self.endpoints.calculations(), &[]).await.and_then_content(calculation_list)
    }

    /// Check if the service is reachable
    ///
    /// Unauthenticated. Returns `Ok(false)` for a non-2xx answer.
    ///
    /// # Errors
    ///
    /// Returns `FragnetError::Timeout` or `FragnetError::Network` if no
    /// response arrives.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<bool> {
        let request = self.http_client.request(Method::GET, self.endpoints.ping());
        let response = self.http_client.send(request).await?;

        let healthy = response.status().is_success();
        debug!(status = response.status().as_u16(), healthy, "Ping answered");
        Ok(healthy)
    }

    /// Authenticated GET returning the status and the body parsed as JSON
    async fn get_json(&self, url: String, params: &[(&'static str, String)]) -> SearchResult<Value> {
        let token = match self.auth.access_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Could not obtain access token");
                return SearchResult::internal(SearchOutcome::ApiTokenRefreshFailure);
            }
        };

        let mut request = self
            .http_client
            .request(Method::GET, &url)
            .header(AUTHORIZATION, format!("bearer {token}"));
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = match self.http_client.send(request).await {
            Ok(response) => response,
            Err(e) => return transport_failure(e),
        };

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return transport_failure(InfraError::from(e).into()),
        };

        let content = match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(status, error = %e, "Response body is not JSON");
                None
            }
        };

        debug!(status, has_content = content.is_some(), "Search request completed");
        SearchResult::success(status, content)
    }
}

fn transport_failure<T>(err: FragnetError) -> SearchResult<T> {
    warn!(error = %err, "Search request failed in transit");
    match err {
        FragnetError::Timeout(_) => SearchResult::internal(SearchOutcome::RequestTimeout),
        other => SearchResult::internal(SearchOutcome::Transport(other.to_string())),
    }
}
