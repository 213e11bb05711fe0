//! Token management wiring
//!
//! Builds the token manager for the configured Squonk realm.

use fragnet_common::auth::{Credentials, OAuthClient, OAuthConfig, TokenManager};
use fragnet_domain::{FragnetConfig, FragnetError, Result};
use tracing::debug;

/// Token endpoint settings from the client configuration
pub fn create_oauth_config(config: &FragnetConfig) -> OAuthConfig {
    OAuthConfig::new(
        config.auth.token_url.clone(),
        config.auth.client_id.clone(),
        config.request_timeout(),
    )
}

/// Token manager on the system clock for `config`
///
/// # Errors
///
/// Returns `FragnetError::Config` if the token endpoint client cannot be built
pub fn create_token_manager(config: &FragnetConfig) -> Result<TokenManager<OAuthClient>> {
    let client = OAuthClient::new(create_oauth_config(config))
        .map_err(|e| FragnetError::Config(e.to_string()))?;

    debug!(
        token_url = %config.auth.token_url,
        client_id = %config.auth.client_id,
        refresh_deadline_secs = config.auth.refresh_deadline_secs,
        "Creating token manager"
    );

    Ok(TokenManager::new(
        client,
        Credentials::new(config.auth.username.clone(), config.auth.password.clone()),
        config.refresh_deadline(),
    ))
}
