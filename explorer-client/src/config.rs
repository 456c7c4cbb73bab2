//! Client configuration

use crate::{ClientResult, FoodFactsClient, NetworkHttpClient};

/// Public Open Food Facts instance
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";
/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Records fetched per search; all paging happens locally over this set
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 200;
/// Categories offered in the category picker
pub const DEFAULT_CATEGORY_LIMIT: usize = 30;

/// Client configuration for the catalog API
///
/// # Environment variables
///
/// | Variable | Default |
/// |----------|---------|
/// | FOOD_API_BASE_URL | https://world.openfoodfacts.org |
/// | FOOD_API_TIMEOUT_SECS | 30 |
/// | FOOD_SEARCH_PAGE_SIZE | 200 |
/// | FOOD_CATEGORY_LIMIT | 30 |
/// | FOOD_USER_AGENT | food-explorer/<version> |
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://world.openfoodfacts.org")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// `page_size` sent with name searches
    pub search_page_size: u32,

    /// How many categories `list_categories` keeps
    pub category_limit: usize,

    /// User-Agent header; the public API asks clients to identify themselves
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
            category_limit: DEFAULT_CATEGORY_LIMIT,
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::new(DEFAULT_BASE_URL);
        Self {
            base_url: std::env::var("FOOD_API_BASE_URL").unwrap_or(defaults.base_url),
            timeout: std::env::var("FOOD_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout),
            search_page_size: std::env::var("FOOD_SEARCH_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.search_page_size),
            category_limit: std::env::var("FOOD_CATEGORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.category_limit),
            user_agent: std::env::var("FOOD_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the search fetch size
    pub fn with_search_page_size(mut self, size: u32) -> Self {
        self.search_page_size = size;
        self
    }

    /// Set how many categories are kept
    pub fn with_category_limit(mut self, limit: usize) -> Self {
        self.category_limit = limit;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create an HTTP transport from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }

    /// Create a catalog client from this configuration
    pub fn build_catalog_client(&self) -> ClientResult<FoodFactsClient> {
        Ok(FoodFactsClient::new(self.build_http_client()?, self))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn default_user_agent() -> String {
    format!("food-explorer/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.search_page_size, 200);
        assert_eq!(config.category_limit, 30);
        assert!(config.user_agent.starts_with("food-explorer/"));
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("http://localhost:9000")
            .with_timeout(5)
            .with_search_page_size(50)
            .with_category_limit(10)
            .with_user_agent("tests");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.search_page_size, 50);
        assert_eq!(config.category_limit, 10);
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn test_bad_base_url_is_config_error() {
        let err = ClientConfig::new("not a url").build_http_client().unwrap_err();
        assert!(matches!(err, crate::ClientError::Config(_)));
    }
}
