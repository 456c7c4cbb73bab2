//! HTTP transport for the catalog API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

/// HTTP transport trait
///
/// `segments` are raw path segments appended to the base URL; the
/// implementation is responsible for percent-encoding them.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> ClientResult<T>;
}

/// Network HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: Url,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Parsed base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ClientError::Config(format!("base URL cannot carry a path: {}", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Upstream {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> NetworkHttpClient {
        NetworkHttpClient::new(&ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let url = client("https://world.openfoodfacts.org")
            .endpoint(&["api", "v0", "product", "737628064502.json"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://world.openfoodfacts.org/api/v0/product/737628064502.json"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client("http://localhost:8080/off/")
            .endpoint(&["categories.json"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/off/categories.json");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let url = client("https://world.openfoodfacts.org")
            .endpoint(&["category", "plant based/vegan.json"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://world.openfoodfacts.org/category/plant%20based%2Fvegan.json"
        );
    }

    #[test]
    fn test_cannot_be_a_base_rejected() {
        let err = NetworkHttpClient::new(&ClientConfig::new("mailto:someone@example.com"))
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
