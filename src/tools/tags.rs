use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

use super::Tool;
use crate::api::FeedbinClient;

/// Tool for listing the account's tags
pub struct GetTagsTool {
    client: Arc<FeedbinClient>,
}

impl GetTagsTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetTagsTool {
    fn name(&self) -> &str {
        "get_tags"
    }

    fn description(&self) -> &str {
        "Get all tags used to organise subscriptions in the Feedbin account"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _params: Value) -> Result<String> {
        Ok(self.client.tags().await?)
    }
}

/// Tool for listing feed-to-tag associations
pub struct GetTaggingsTool {
    client: Arc<FeedbinClient>,
}

impl GetTaggingsTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetTaggingsTool {
    fn name(&self) -> &str {
        "get_taggings"
    }

    fn description(&self) -> &str {
        "Get all taggings, the mapping of which feeds belong to which tags"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _params: Value) -> Result<String> {
        Ok(self.client.taggings().await?)
    }
}
