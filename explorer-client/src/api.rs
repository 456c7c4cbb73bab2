//! Catalog API
//!
//! The four remote lookups the application consumes, plus the unfiltered
//! listing shown on startup. Raw records are returned as-is; normalization
//! is the caller's job.

use crate::{ClientConfig, ClientError, ClientResult, HttpClient, NetworkHttpClient};
use async_trait::async_trait;
use serde::Deserialize;
use shared::models::{Category, RawProduct};

/// `cgi/search.pl` and `category/{name}.json` response
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Option<Vec<RawProduct>>,
}

/// `api/v0/product/{code}.json` response
#[derive(Debug, Deserialize)]
pub struct BarcodeResponse {
    /// 1 when the product exists
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub status_verbose: Option<String>,
    #[serde(default)]
    pub product: Option<RawProduct>,
}

/// `categories.json` response
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub tags: Option<Vec<Category>>,
}

/// Remote catalog lookups
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Unfiltered listing (empty search terms)
    async fn initial_products(&self) -> ClientResult<Vec<RawProduct>>;

    async fn search_by_name(&self, query: &str) -> ClientResult<Vec<RawProduct>>;

    /// Zero or one product for a barcode
    async fn search_by_barcode(&self, code: &str) -> ClientResult<Option<RawProduct>>;

    async fn list_by_category(&self, category: &str) -> ClientResult<Vec<RawProduct>>;

    async fn list_categories(&self) -> ClientResult<Vec<Category>>;
}

/// Open Food Facts catalog client
#[derive(Debug, Clone)]
pub struct FoodFactsClient<H = NetworkHttpClient> {
    http: H,
    search_page_size: String,
    category_limit: usize,
}

impl<H: HttpClient> FoodFactsClient<H> {
    pub fn new(http: H, config: &ClientConfig) -> Self {
        Self {
            http,
            search_page_size: config.search_page_size.to_string(),
            category_limit: config.category_limit,
        }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    async fn search(&self, terms: &str) -> ClientResult<Vec<RawProduct>> {
        let query = [
            ("search_terms", terms),
            ("page_size", self.search_page_size.as_str()),
            ("json", "true"),
        ];
        let response: SearchResponse = self.http.get(&["cgi", "search.pl"], &query).await?;
        let products = response.products.unwrap_or_default();
        tracing::info!(terms, count = products.len(), "search results");
        Ok(products)
    }
}

#[async_trait]
impl<H: HttpClient> CatalogApi for FoodFactsClient<H> {
    async fn initial_products(&self) -> ClientResult<Vec<RawProduct>> {
        self.search("").await
    }

    async fn search_by_name(&self, query: &str) -> ClientResult<Vec<RawProduct>> {
        self.search(query).await
    }

    async fn search_by_barcode(&self, code: &str) -> ClientResult<Option<RawProduct>> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ClientError::Validation("barcode is empty".into()));
        }

        let file = format!("{}.json", code);
        let response: BarcodeResponse =
            match self.http.get(&["api", "v0", "product", file.as_str()], &[]).await {
                Ok(response) => response,
                Err(ClientError::NotFound(_)) => {
                    tracing::info!(code, "barcode not found");
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };

        match (response.status, response.product) {
            (Some(1), Some(product)) => Ok(Some(product)),
            (Some(1), None) => Err(ClientError::InvalidResponse(format!(
                "barcode {} reported found without a product",
                code
            ))),
            _ => {
                tracing::info!(
                    code,
                    status = ?response.status_verbose,
                    "barcode not found"
                );
                Ok(None)
            }
        }
    }

    async fn list_by_category(&self, category: &str) -> ClientResult<Vec<RawProduct>> {
        let file = format!("{}.json", category);
        let response: SearchResponse = self.http.get(&["category", file.as_str()], &[]).await?;
        let products = response.products.unwrap_or_default();
        tracing::info!(category, count = products.len(), "category products");
        Ok(products)
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let response: CategoriesResponse = self.http.get(&["categories.json"], &[]).await?;
        let categories: Vec<Category> = response
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter(|c| c.name.as_deref().is_some_and(|n| !n.trim().is_empty()))
            .take(self.category_limit)
            .collect();
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    /// Canned transport keyed by joined path
    #[derive(Default)]
    struct FakeHttp {
        routes: HashMap<String, Value>,
        requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl FakeHttp {
        fn route(mut self, path: &str, body: Value) -> Self {
            self.routes.insert(path.to_string(), body);
            self
        }

        fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
            self.requests.lock().clone()
        }
    }

    #[async_trait]
    impl HttpClient for FakeHttp {
        async fn get<T: DeserializeOwned>(
            &self,
            segments: &[&str],
            query: &[(&str, &str)],
        ) -> ClientResult<T> {
            let path = segments.join("/");
            self.requests.lock().push((
                path.clone(),
                query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));
            match self.routes.get(&path) {
                Some(body) => Ok(serde_json::from_value(body.clone())?),
                None => Err(ClientError::NotFound(path)),
            }
        }
    }

    fn client(http: FakeHttp) -> FoodFactsClient<FakeHttp> {
        FoodFactsClient::new(http, &ClientConfig::default().with_category_limit(2))
    }

    #[tokio::test]
    async fn test_search_sends_terms_and_page_size() {
        let http = FakeHttp::default().route(
            "cgi/search.pl",
            json!({ "count": 2, "products": [{ "code": "1" }, { "code": "2" }] }),
        );
        let api = client(http);
        let products = api.search_by_name("coca cola").await.unwrap();
        assert_eq!(products.len(), 2);

        let requests = api.http().requests();
        assert_eq!(requests[0].0, "cgi/search.pl");
        assert_eq!(
            requests[0].1,
            vec![
                ("search_terms".to_string(), "coca cola".to_string()),
                ("page_size".to_string(), "200".to_string()),
                ("json".to_string(), "true".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_initial_products_uses_empty_terms() {
        let http = FakeHttp::default().route("cgi/search.pl", json!({ "products": [] }));
        let api = client(http);
        assert!(api.initial_products().await.unwrap().is_empty());
        assert_eq!(api.http().requests()[0].1[0].1, "");
    }

    #[tokio::test]
    async fn test_missing_products_is_empty_list() {
        let http = FakeHttp::default().route("category/snacks.json", json!({ "products": null }));
        let api = client(http);
        assert!(api.list_by_category("snacks").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_barcode_found() {
        let http = FakeHttp::default().route(
            "api/v0/product/737628064502.json",
            json!({ "status": 1, "product": { "code": "737628064502", "product_name": "Noodles" } }),
        );
        let api = client(http);
        let product = api.search_by_barcode(" 737628064502 ").await.unwrap().unwrap();
        assert_eq!(product.product_name.as_deref(), Some("Noodles"));
    }

    #[tokio::test]
    async fn test_barcode_status_zero_is_none() {
        let http = FakeHttp::default().route(
            "api/v0/product/000.json",
            json!({ "status": 0, "status_verbose": "product not found" }),
        );
        let api = client(http);
        assert!(api.search_by_barcode("000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_barcode_found_without_product_is_invalid() {
        let http = FakeHttp::default().route("api/v0/product/42.json", json!({ "status": 1 }));
        let api = client(http);
        let err = api.search_by_barcode("42").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_barcode_http_404_is_none() {
        let api = client(FakeHttp::default());
        assert!(api.search_by_barcode("123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_barcode_rejected() {
        let api = client(FakeHttp::default());
        let err = api.search_by_barcode("  ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(api.http().requests().is_empty());
    }

    #[tokio::test]
    async fn test_categories_truncated() {
        let http = FakeHttp::default().route(
            "categories.json",
            json!({ "count": 3, "tags": [
                { "id": "en:snacks", "name": "Snacks", "products": 10 },
                { "id": "en:beverages", "name": "Beverages", "products": 9 },
                { "id": "en:dairies", "name": "Dairies", "products": 8 }
            ]}),
        );
        let api = client(http);
        let names: Vec<_> = api
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Snacks", "Beverages"]);
    }

    #[tokio::test]
    async fn test_nameless_categories_skipped() {
        let http = FakeHttp::default().route(
            "categories.json",
            json!({ "tags": [
                { "id": "en:orphan" },
                { "id": "en:blank", "name": "  " },
                { "id": "en:snacks", "name": "Snacks" },
                { "id": "en:numeric", "name": 42 },
                { "id": "en:dairies", "name": "Dairies" }
            ]}),
        );
        let api = client(http);
        let names: Vec<_> = api
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Snacks", "42"]);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_serialization_error() {
        let http = FakeHttp::default().route("cgi/search.pl", json!({ "products": "nope" }));
        let api = client(http);
        let err = api.search_by_name("x").await.unwrap_err();
        assert!(err.is_network());
    }
}
