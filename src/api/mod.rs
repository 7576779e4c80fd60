mod query;

pub use query::{EntriesQuery, MAX_PER_PAGE};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::{FeedbinConfig, REQUEST_TIMEOUT};
use crate::error::FeedbinError;

/// Client for the Feedbin REST API.
///
/// Stateless: every call builds a fresh connection, performs one round trip,
/// and drops it on all exit paths. Read operations relay the upstream JSON
/// pretty-printed without touching its fields; mutation operations only
/// confirm the HTTP status.
pub struct FeedbinClient {
    config: FeedbinConfig,
}

impl FeedbinClient {
    pub fn new(config: FeedbinConfig) -> Self {
        Self { config }
    }

    /// List every subscription in the account.
    pub async fn subscriptions(&self) -> Result<String, FeedbinError> {
        self.get_document("subscriptions.json", &[]).await
    }

    /// Fetch a single feed.
    pub async fn feed(&self, feed_id: i64) -> Result<String, FeedbinError> {
        self.get_document(&format!("feeds/{}.json", feed_id), &[])
            .await
    }

    /// List entries matching the query, against the feed-agnostic or
    /// feed-scoped collection as the query dictates.
    pub async fn entries(&self, query: &EntriesQuery) -> Result<String, FeedbinError> {
        self.get_document(&query.path(), &query.params()).await
    }

    /// Fetch a single entry, including its full content body.
    pub async fn entry(&self, entry_id: i64) -> Result<String, FeedbinError> {
        self.get_document(&format!("entries/{}.json", entry_id), &[])
            .await
    }

    /// Flat list of all unread entry ids.
    pub async fn unread_entry_ids(&self) -> Result<String, FeedbinError> {
        self.get_document("unread_entries.json", &[]).await
    }

    /// Mark entries as read.
    pub async fn mark_read(&self, entry_ids: &[i64]) -> Result<(), FeedbinError> {
        self.send_entry_ids(
            Method::DELETE,
            "unread_entries.json",
            json!({ "unread_entries": entry_ids }),
        )
        .await
    }

    /// Mark entries as unread.
    pub async fn mark_unread(&self, entry_ids: &[i64]) -> Result<(), FeedbinError> {
        self.send_entry_ids(
            Method::POST,
            "unread_entries.json",
            json!({ "unread_entries": entry_ids }),
        )
        .await
    }

    /// Flat list of all starred entry ids.
    pub async fn starred_entry_ids(&self) -> Result<String, FeedbinError> {
        self.get_document("starred_entries.json", &[]).await
    }

    /// Star entries.
    pub async fn star(&self, entry_ids: &[i64]) -> Result<(), FeedbinError> {
        self.send_entry_ids(
            Method::POST,
            "starred_entries.json",
            json!({ "starred_entries": entry_ids }),
        )
        .await
    }

    /// Unstar entries.
    pub async fn unstar(&self, entry_ids: &[i64]) -> Result<(), FeedbinError> {
        self.send_entry_ids(
            Method::DELETE,
            "starred_entries.json",
            json!({ "starred_entries": entry_ids }),
        )
        .await
    }

    /// List the account's tags.
    pub async fn tags(&self) -> Result<String, FeedbinError> {
        self.get_document("tags.json", &[]).await
    }

    /// List the feed-to-tag associations.
    pub async fn taggings(&self) -> Result<String, FeedbinError> {
        self.get_document("taggings.json", &[]).await
    }

    fn http(&self) -> Result<Client, FeedbinError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;
        Ok(client)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, FeedbinError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let builder = self
            .http()?
            .request(method, url)
            .basic_auth(&self.config.email, Some(&self.config.password));
        Ok(builder)
    }

    /// GET an endpoint and relay the JSON document pretty-printed, fields
    /// exactly as upstream sent them.
    async fn get_document(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<String, FeedbinError> {
        debug!(path, "feedbin GET");
        let mut request = self.request(Method::GET, path)?;
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = check_status(request.send().await?).await?;
        let document: Value = response.json().await?;
        Ok(serde_json::to_string_pretty(&document)?)
    }

    async fn send_entry_ids(
        &self,
        method: Method,
        path: &str,
        body: Value,
    ) -> Result<(), FeedbinError> {
        debug!(%method, path, "feedbin mutation");
        let response = self.request(method, path)?.json(&body).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Fail on any non-2xx status, carrying the upstream status and body as the
/// error detail.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FeedbinError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(FeedbinError::Upstream { status, body })
}
