// ============================================================================
// Employee Console Infrastructure - Data Service REST Client
// File: crates/emp-infrastructure/src/data_service/client.rs
// ============================================================================
//! Thin client for the hosted data service REST surface
//!
//! One request per call: no retries, no caching.

use std::time::Duration;

use emp_shared::config::DataServiceSettings;
use emp_shared::constants::REST_PATH;
use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use super::error::RestError;
use super::query::TableQuery;

pub struct RestClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    pub fn new(settings: &DataServiceSettings) -> Result<Self, RestError> {
        Url::parse(&settings.url).map_err(|e| RestError::InvalidUrl(format!("{}: {}", settings.url, e)))?;

        let mut builder = Client::builder();
        if settings.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_seconds));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: settings.url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str, params: &[(String, String)]) -> Result<Url, RestError> {
        let raw = format!("{}/{}/{}", self.base_url, REST_PATH, table);
        let mut url = Url::parse(&raw).map_err(|e| RestError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Runs a select and decodes every returned row.
    pub async fn select<T: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<T>, RestError> {
        let url = self.table_url(query.table(), query.params())?;
        debug!(table = query.table(), %url, "select");

        let response = self.authorized(self.http.get(url)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(table = query.table(), %status, "select failed");
            return Err(RestError::from_response_body(status, &body));
        }

        Ok(response.json::<Vec<T>>().await?)
    }

    pub async fn insert<T: Serialize + Sync>(&self, table: &str, rows: &[T]) -> Result<(), RestError> {
        let url = self.table_url(table, &[])?;
        debug!(table, rows = rows.len(), "insert");

        let response = self
            .authorized(self.http.post(url))
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;
        Self::expect_success(table, response).await
    }

    /// Updates the rows matching the query's filters.
    pub async fn update<T: Serialize + Sync>(&self, query: &TableQuery, changes: &T) -> Result<(), RestError> {
        let url = self.table_url(query.table(), query.params())?;
        debug!(table = query.table(), %url, "update");

        let response = self
            .authorized(self.http.patch(url))
            .header("Prefer", "return=minimal")
            .json(changes)
            .send()
            .await?;
        Self::expect_success(query.table(), response).await
    }

    async fn expect_success(table: &str, response: reqwest::Response) -> Result<(), RestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        error!(table, %status, "write failed");
        Err(RestError::from_response_body(status, &body))
    }
}
