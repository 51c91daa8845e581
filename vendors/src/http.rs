//! HTTP table client
//!
//! Thin adapter over reqwest. Non-success statuses are turned into
//! [`ApiError`]s via [`ApiError::from_status`]; no call is ever retried.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use tablet_bench_core::{AddItemsRequest, ApiError, Item, TableClient};

/// Default server address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// API version prefix appended to the base URL
const API_PREFIX: &str = "/v1";

/// HTTP client for the restaurant table/item API
#[derive(Debug, Clone)]
pub struct HttpTableClient {
    client: Client,
    base_url: String,
}

impl HttpTableClient {
    /// Create a new client for the server at `base_url` (without the `/v1` prefix)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-requested-with",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("tablet-bench/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::with_client(client, base_url)
    }

    /// Create a client around an existing reqwest `Client`
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            client,
            base_url: format!("{}{}", base_url.trim_end_matches('/'), API_PREFIX),
        })
    }

    /// `{base}/v1/table/{table_id}/items`
    fn items_url(&self, table_id: usize) -> String {
        format!("{}/table/{}/items", self.base_url, table_id)
    }

    /// `{base}/v1/table/{table_id}/item/{uuid}`
    fn item_url(&self, table_id: usize, uuid: &str) -> String {
        format!("{}/table/{}/item/{}", self.base_url, table_id, uuid)
    }

    /// Pass success responses through, turn everything else into an `ApiError`
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), message))
    }
}

/// Reject base URLs that could never reach an HTTP server
///
/// Requests built from such a URL fail before touching the network, which
/// would leave a client loop spinning on instant errors.
fn parse_base_url(base_url: &str) -> Result<&str, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(base_url)
}

#[async_trait]
impl TableClient for HttpTableClient {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn add_items(
        &self,
        table_id: usize,
        item_names: &[String],
    ) -> Result<Vec<Item>, ApiError> {
        let body = AddItemsRequest::new(item_names.to_vec());
        let response = self
            .client
            .post(self.items_url(table_id))
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response).await?.json::<Vec<Item>>().await?)
    }

    async fn get_item(&self, table_id: usize, uuid: &str) -> Result<Item, ApiError> {
        let response = self.client.get(self.item_url(table_id, uuid)).send().await?;

        Ok(Self::check(response).await?.json::<Item>().await?)
    }

    async fn get_items(&self, table_id: usize) -> Result<Vec<Item>, ApiError> {
        let response = self.client.get(self.items_url(table_id)).send().await?;

        Ok(Self::check(response).await?.json::<Vec<Item>>().await?)
    }

    async fn remove_item(&self, table_id: usize, uuid: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.item_url(table_id, uuid))
            .send()
            .await?;

        // Body is not inspected
        Self::check(response).await.map(|_| ())
    }

    async fn ping(&self) -> Result<(), ApiError> {
        // Any answer at all, even an error status, means the server is up
        self.client.get(self.items_url(0)).send().await?;
        tracing::trace!(endpoint = %self.base_url, "Ping answered");
        Ok(())
    }
}
