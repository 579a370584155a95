//! HTTP client for the storefront REST backend.

mod catalog;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use vitrine_core::{FacetEntry, Product};

use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::types::{ApiFacetEntry, ApiProduct};

/// Client for the storefront backend's catalog, cart, and wishlist endpoints.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx responses
/// as typed errors. Transient errors (429, network failures) are retried with
/// exponential backoff up to `max_retries` additional attempts, honoring the
/// server's `Retry-After` as a floor on the delay; the default configuration
/// disables retries so the catalog load stays single-shot.
#[derive(Debug)]
pub struct StorefrontClient {
    pub(crate) client: Client,
    base_url: reqwest::Url,
    /// Maximum number of retry attempts after the first failure.
    pub(crate) max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    pub(crate) backoff_base_secs: u64,
}

impl StorefrontClient {
    /// Creates a `StorefrontClient` with configured timeout, `User-Agent`,
    /// and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ClientError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ClientError> {
        let base_url = reqwest::Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches the product list, optionally narrowed server-side to one
    /// category facet id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for network failures, non-2xx statuses, or an
    /// unparseable response body.
    pub async fn fetch_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Product>, ClientError> {
        let mut url = self.endpoint_url("products")?;
        if let Some(category) = category {
            url.query_pairs_mut().append_pair("category", category);
        }
        let rows: Vec<ApiProduct> = self.get_json(url.as_str(), "product list").await?;
        Ok(rows.into_iter().map(ApiProduct::into_product).collect())
    }

    /// Fetches the category facet table.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for network failures, non-2xx statuses, or an
    /// unparseable response body.
    pub async fn fetch_categories(&self) -> Result<Vec<FacetEntry>, ClientError> {
        self.fetch_facets("categories").await
    }

    /// Fetches the material facet table.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for network failures, non-2xx statuses, or an
    /// unparseable response body.
    pub async fn fetch_materials(&self) -> Result<Vec<FacetEntry>, ClientError> {
        self.fetch_facets("materials").await
    }

    /// Fetches the grade facet table.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for network failures, non-2xx statuses, or an
    /// unparseable response body.
    pub async fn fetch_grades(&self) -> Result<Vec<FacetEntry>, ClientError> {
        self.fetch_facets("grades").await
    }

    async fn fetch_facets(&self, path: &str) -> Result<Vec<FacetEntry>, ClientError> {
        let url = self.endpoint_url(path)?;
        let rows: Vec<ApiFacetEntry> = self.get_json(url.as_str(), path).await?;
        Ok(rows.into_iter().map(ApiFacetEntry::into_entry).collect())
    }

    /// Performs a GET request and deserializes the JSON body, mapping HTTP
    /// statuses to typed errors and retrying transient failures per the
    /// client's retry policy.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, ClientError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            let context = context.to_owned();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ClientError::RateLimited { retry_after_secs });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ClientError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(ClientError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<T>(&body).map_err(|e| ClientError::Deserialize {
                    context,
                    source: e,
                })
            }
        })
        .await
    }

    /// Builds an absolute endpoint URL from the configured base.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<reqwest::Url, ClientError> {
        self.base_url
            .join(&format!(
                "{}/{path}",
                self.base_url.path().trim_end_matches('/')
            ))
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
