use anyhow::{Context, anyhow};

/// Configuration for Yelp Fusion API access.
#[derive(Debug, Clone)]
pub struct YelpConfig {
    pub api_key: String,
    pub base_url: String,
    pub search_limit: u32,
}

/// Yelp rejects limits above this value.
const MAX_SEARCH_LIMIT: u32 = 50;

impl YelpConfig {
    /// Variables:
    /// - YELP_API_KEY: API key sent as a bearer token (required)
    /// - YELP_BASE_URL: API root (default: "https://api.yelp.com/v3")
    /// - YELP_SEARCH_LIMIT: results per search, clamped to 1..=50 (default: 20)
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("YELP_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow!("YELP_API_KEY must be set"))?;
        let base_url =
            lookup("YELP_BASE_URL").unwrap_or_else(|| yelp::client::DEFAULT_BASE_URL.to_string());
        let search_limit = match lookup("YELP_SEARCH_LIMIT") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("YELP_SEARCH_LIMIT is not a number: {}", raw))?
                .clamp(1, MAX_SEARCH_LIMIT),
            None => yelp::search_provider::DEFAULT_SEARCH_LIMIT,
        };

        Ok(Self {
            api_key,
            base_url,
            search_limit,
        })
    }
}
