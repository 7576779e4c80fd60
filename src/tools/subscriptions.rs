use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Value, json};

use super::Tool;
use crate::api::FeedbinClient;

/// Tool for listing every subscription in the account
pub struct GetSubscriptionsTool {
    client: Arc<FeedbinClient>,
}

impl GetSubscriptionsTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetSubscriptionsTool {
    fn name(&self) -> &str {
        "get_subscriptions"
    }

    fn description(&self) -> &str {
        "List all feed subscriptions in the Feedbin account, each with its id, feed_id, title, feed_url, site_url, and created_at"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _params: Value) -> Result<String> {
        Ok(self.client.subscriptions().await?)
    }
}

/// Tool for fetching a single feed
pub struct GetFeedTool {
    client: Arc<FeedbinClient>,
}

impl GetFeedTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetFeedTool {
    fn name(&self) -> &str {
        "get_feed"
    }

    fn description(&self) -> &str {
        "Get details for a specific feed by its feed_id"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "feed_id": {
                    "type": "integer",
                    "description": "The numeric feed ID"
                }
            },
            "required": ["feed_id"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let feed_id = params["feed_id"]
            .as_i64()
            .context("missing 'feed_id' parameter")?;

        Ok(self.client.feed(feed_id).await?)
    }
}
