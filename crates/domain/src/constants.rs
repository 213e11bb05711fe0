//! Service constants
//!
//! Centralized location for the Fragnet REST contract and client defaults.

// Service endpoints
pub const DEFAULT_FRAGNET_HOST: &str = "http://fragnet.squonk.it:8080";
pub const DEFAULT_TOKEN_URL: &str =
    "https://squonk.it/auth/realms/squonk/protocol/openid-connect/token";
pub const DEFAULT_CLIENT_ID: &str = "fragnet-search";
pub const API_PATH: &str = "fragnet-search/rest/v2";

// Client timing
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
/// Minimum remaining access token life before a proactive refresh.
pub const DEFAULT_REFRESH_DEADLINE_SECS: u64 = 45;

// Search bounds
pub const MIN_HOPS: i64 = 1;
pub const MAX_HOPS: i64 = 2;
pub const MAX_EXPANSION_HOPS: i64 = 3;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 5000;

/// Status code reported for failures that never produced an HTTP response.
pub const INTERNAL_ERROR_CODE: u16 = 600;
