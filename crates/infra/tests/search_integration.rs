//! End-to-end search flows
//!
//! One wiremock server plays both the token endpoint and the search service.
//! The client is built from configuration exactly as an application would.

use fragnet_domain::constants::INTERNAL_ERROR_CODE;
use fragnet_domain::{
    ExpansionQuery, FragnetConfig, NeighbourhoodQuery, SearchOutcome, ValidationError,
};
use fragnet_infra::FragnetSearch;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/auth/realms/squonk/protocol/openid-connect/token";
const NEIGHBOURHOOD_PATH: &str =
    "/fragnet-search/rest/v2/search/neighbourhood/c1ccc%28Nc2nc3ccccc3o2%29cc1";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fragnet_infra=debug,fragnet_common=debug")
        .with_test_writer()
        .try_init();
}

fn config_for(server: &MockServer) -> FragnetConfig {
    let mut config = FragnetConfig::new(server.uri(), "alice", "s3cret");
    config.auth.token_url = format!("{}{TOKEN_PATH}", server.uri());
    config.server.request_timeout_secs = 5;
    config
}

fn token_body(access: &str, expires_in: i64, refresh: &str) -> serde_json::Value {
    json!({
        "access_token": access,
        "expires_in": expires_in,
        "refresh_token": refresh,
        "refresh_expires_in": 1800,
        "token_type": "bearer"
    })
}

fn query() -> NeighbourhoodQuery {
    NeighbourhoodQuery::new("c1ccc(Nc2nc3ccccc3o2)cc1", 3, 1, 2, 100)
}

/// Validates that the first search authenticates on its own.
///
/// Assertions:
/// - One password grant, no refresh grant
/// - The search carries the issued token and returns the parsed body
#[tokio::test]
async fn test_first_search_authenticates_lazily() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("A1", 300, "R1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(NEIGHBOURHOOD_PATH))
        .and(header("Authorization", "bearer A1"))
        .and(query_param("hops", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nodes": [], "edges": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = FragnetSearch::from_config(&config_for(&server)).expect("client");

    for _ in 0..2 {
        let result = client.search_neighbourhood(&query()).await;
        assert_eq!(result.status_code, 200);
        assert_eq!(result.message, SearchOutcome::Success);
        assert_eq!(result.content, Some(json!({"nodes": [], "edges": []})));
    }
}

/// Validates the refresh path with a token issued inside the deadline.
///
/// # Test Steps
/// 1. Authenticate with a 30 second token, already inside the 45 second
///    deadline
/// 2. Search: one refresh grant with `R1` is sent first
/// 3. Search again: the refreshed 300 second token is reused
#[tokio::test]
async fn test_short_lived_token_refreshed_before_search() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("A1", 30, "R1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("A2", 300, "R2")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fragnet-search/rest/v2/search/suppliers"))
        .and(header("Authorization", "bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"label": "V_MP", "name": "MolPort"},
            {"label": "V_REAL", "name": "Enamine REAL"}
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let client = FragnetSearch::from_config(&config_for(&server)).expect("client");
    client.authenticate().await.expect("authentication should succeed");

    for _ in 0..2 {
        let result = client.search_suppliers().await;
        assert_eq!(result.status_code, 200);
        assert_eq!(
            result.content,
            Some(vec!["MolPort".to_string(), "Enamine REAL".to_string()])
        );
    }
}

#[tokio::test]
async fn test_rejected_credentials_fail_search_without_request() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = FragnetSearch::from_config(&config_for(&server)).expect("client");

    assert!(client.authenticate().await.is_err());

    let result = client.search_neighbourhood(&query()).await;
    assert_eq!(result.status_code, INTERNAL_ERROR_CODE);
    assert_eq!(result.message, SearchOutcome::ApiTokenRefreshFailure);
    assert!(result.content.is_none());
    assert!(!client.token_manager().is_authenticated().await);
}

#[tokio::test]
async fn test_invalid_query_makes_no_requests() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = FragnetSearch::from_config(&config_for(&server)).expect("client");
    let query = query().with_calculations(["LOGP", "XLOGP"]);

    let result = client.search_neighbourhood(&query).await;

    assert_eq!(result.status_code, INTERNAL_ERROR_CODE);
    assert_eq!(
        result.message,
        SearchOutcome::Invalid(ValidationError::InvalidCalculation("XLOGP".to_string()))
    );
    assert_eq!(result.message.to_string(), "InvalidCalculation: XLOGP");
}

#[tokio::test]
async fn test_ping_needs_no_token() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fragnet-search/rest/v2/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let client = FragnetSearch::from_config(&config_for(&server)).expect("client");

    assert!(client.ping().await.expect("ping"));
}

#[tokio::test]
async fn test_expansion_search_shares_token_with_neighbourhood() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("A1", 300, "R1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fragnet-search/rest/v2/search/expand/c1ccc%28Nc2nc3ccccc3o2%29cc1"))
        .and(header("Authorization", "bearer A1"))
        .and(query_param("hops", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"size": 0})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(NEIGHBOURHOOD_PATH))
        .and(header("Authorization", "bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nodes": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = FragnetSearch::from_config(&config_for(&server)).expect("client");

    let expansion = ExpansionQuery::new("c1ccc(Nc2nc3ccccc3o2)cc1", 3, 1, 3);
    let result = client.search_expansion(&expansion).await;
    assert_eq!(result.status_code, 200);
    assert_eq!(result.content, Some(json!({"size": 0})));

    let result = client.search_neighbourhood(&query()).await;
    assert_eq!(result.status_code, 200);
}
