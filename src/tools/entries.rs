use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Value, json};

use super::Tool;
use crate::api::{EntriesQuery, FeedbinClient};

fn page_param(params: &Value) -> i64 {
    params["page"].as_i64().unwrap_or(1)
}

fn per_page_param(params: &Value) -> i64 {
    params["per_page"].as_i64().unwrap_or(50)
}

fn paging_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "page": {
                "type": "integer",
                "description": "Page number (default 1)"
            },
            "per_page": {
                "type": "integer",
                "description": "Number of entries per page, max 100 (default 50)"
            }
        },
        "required": []
    })
}

/// Tool for paging through unread entries
pub struct GetUnreadEntriesTool {
    client: Arc<FeedbinClient>,
}

impl GetUnreadEntriesTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetUnreadEntriesTool {
    fn name(&self) -> &str {
        "get_unread_entries"
    }

    fn description(&self) -> &str {
        "Get a page of unread article entries, each with fields like id, feed_id, title, author, summary, url, published, created_at"
    }

    fn schema(&self) -> Value {
        paging_schema()
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let query = EntriesQuery {
            read: Some(false),
            page: page_param(&params),
            per_page: per_page_param(&params),
            ..EntriesQuery::default()
        };

        Ok(self.client.entries(&query).await?)
    }
}

/// Tool for paging through already-read entries
pub struct GetReadEntriesTool {
    client: Arc<FeedbinClient>,
}

impl GetReadEntriesTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetReadEntriesTool {
    fn name(&self) -> &str {
        "get_read_entries"
    }

    fn description(&self) -> &str {
        "Get a page of read article entries, useful for reviewing recently-read articles"
    }

    fn schema(&self) -> Value {
        paging_schema()
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let query = EntriesQuery {
            read: Some(true),
            page: page_param(&params),
            per_page: per_page_param(&params),
            ..EntriesQuery::default()
        };

        Ok(self.client.entries(&query).await?)
    }
}

/// Tool for paging through starred entries
pub struct GetStarredEntriesTool {
    client: Arc<FeedbinClient>,
}

impl GetStarredEntriesTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetStarredEntriesTool {
    fn name(&self) -> &str {
        "get_starred_entries"
    }

    fn description(&self) -> &str {
        "Get a page of starred (bookmarked) article entries"
    }

    fn schema(&self) -> Value {
        paging_schema()
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let query = EntriesQuery {
            starred: Some(true),
            page: page_param(&params),
            per_page: per_page_param(&params),
            ..EntriesQuery::default()
        };

        Ok(self.client.entries(&query).await?)
    }
}

/// Tool for listing entries with optional filters
pub struct GetEntriesTool {
    client: Arc<FeedbinClient>,
}

impl GetEntriesTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetEntriesTool {
    fn name(&self) -> &str {
        "get_entries"
    }

    fn description(&self) -> &str {
        "Get article entries with optional filters: a since timestamp, a specific feed, or a list of entry ids"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "page": {
                    "type": "integer",
                    "description": "Page number (default 1)"
                },
                "per_page": {
                    "type": "integer",
                    "description": "Number of entries per page, max 100 (default 50)"
                },
                "since": {
                    "type": "string",
                    "description": "Only return entries created after this ISO 8601 datetime, e.g. 2024-01-01T00:00:00.000000Z"
                },
                "feed_id": {
                    "type": "integer",
                    "description": "If non-zero, only return entries from this specific feed"
                },
                "ids": {
                    "type": "string",
                    "description": "Comma-separated list of specific entry IDs to retrieve (max 100)"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let query = EntriesQuery {
            page: page_param(&params),
            per_page: per_page_param(&params),
            since: params["since"].as_str().unwrap_or_default().to_string(),
            ids: params["ids"].as_str().unwrap_or_default().to_string(),
            feed_id: params["feed_id"].as_i64().unwrap_or(0),
            ..EntriesQuery::default()
        };

        Ok(self.client.entries(&query).await?)
    }
}

/// Tool for fetching one entry with its full content
pub struct GetEntryTool {
    client: Arc<FeedbinClient>,
}

impl GetEntryTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetEntryTool {
    fn name(&self) -> &str {
        "get_entry"
    }

    fn description(&self) -> &str {
        "Get the full details of a single entry by its ID, including the full HTML body"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "entry_id": {
                    "type": "integer",
                    "description": "The numeric entry ID"
                }
            },
            "required": ["entry_id"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let entry_id = params["entry_id"]
            .as_i64()
            .context("missing 'entry_id' parameter")?;

        Ok(self.client.entry(entry_id).await?)
    }
}
