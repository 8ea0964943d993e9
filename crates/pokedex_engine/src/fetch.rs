use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{CatalogPage, ItemDetail};
use crate::types::{FailureKind, FetchError};

/// Connection settings for the catalog API.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Seam over the remote API so the aggregator and engine can be exercised
/// against test doubles.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the first page of item summaries, at most `limit` entries.
    async fn list_page(&self, limit: usize) -> Result<CatalogPage, FetchError>;

    /// Fetch a detail record at its canonical URL from a summary.
    async fn detail_by_url(&self, url: &str) -> Result<ItemDetail, FetchError>;

    /// Fetch a detail record by item name. The key is lower-cased before
    /// being put in the path; the API's lookup is case-sensitive while
    /// list-derived names may be mixed case.
    async fn detail_by_key(&self, key: &str) -> Result<ItemDetail, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestCatalogApi {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn resource_url(&self, suffix: &str) -> Result<Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/pokemon{suffix}"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::new(FailureKind::NotFound, status.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response.json::<T>().await.map_err(|err| {
            if err.is_decode() {
                FetchError::new(FailureKind::Decode, err.to_string())
            } else {
                map_reqwest_error(err)
            }
        })
    }
}

#[async_trait::async_trait]
impl CatalogApi for ReqwestCatalogApi {
    async fn list_page(&self, limit: usize) -> Result<CatalogPage, FetchError> {
        let mut url = self.resource_url("")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        self.get_json(url).await
    }

    async fn detail_by_url(&self, url: &str) -> Result<ItemDetail, FetchError> {
        let parsed = Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        self.get_json(parsed).await
    }

    async fn detail_by_key(&self, key: &str) -> Result<ItemDetail, FetchError> {
        let url = self.resource_url(&format!("/{}", key.to_lowercase()))?;
        self.get_json(url).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
