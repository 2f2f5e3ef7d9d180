//! Service factory for building command dependencies.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{http::HttpClient, provider::GitHubProvider};

use super::config::Config;

/// User agent sent with every API request.
pub const USER_AGENT: &str = "woven-metadata-fetch/1.0";

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("token {}", token))
            .context("Token contains characters not allowed in an HTTP header")?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub provider from configuration
pub fn build_provider(config: &Config) -> Result<GitHubProvider> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHubProvider::from_http_client(http_client, &config.api_url))
}
