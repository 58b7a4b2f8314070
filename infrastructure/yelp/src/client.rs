use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared Yelp Fusion HTTP client configuration.
pub struct YelpClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl YelpClient {
    pub fn new(api_key: String) -> Result<Self, reqwest::Error> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Fails instead of falling back to a client without a request timeout.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the business search endpoint URL.
    pub fn business_search_url(&self) -> String {
        format!("{}/businesses/search", self.base_url)
    }
}
