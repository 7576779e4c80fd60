use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

use super::{Tool, entry_ids_param};
use crate::api::FeedbinClient;

/// Tool for listing every starred entry id
pub struct GetStarredEntryIdsTool {
    client: Arc<FeedbinClient>,
}

impl GetStarredEntryIdsTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetStarredEntryIdsTool {
    fn name(&self) -> &str {
        "get_starred_entry_ids"
    }

    fn description(&self) -> &str {
        "Get the flat list of all starred entry IDs"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _params: Value) -> Result<String> {
        Ok(self.client.starred_entry_ids().await?)
    }
}

/// Tool for starring entries
pub struct StarEntriesTool {
    client: Arc<FeedbinClient>,
}

impl StarEntriesTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for StarEntriesTool {
    fn name(&self) -> &str {
        "star_entries"
    }

    fn description(&self) -> &str {
        "Star (bookmark) one or more entries"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "entry_ids": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "List of entry IDs to star"
                }
            },
            "required": ["entry_ids"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let entry_ids = entry_ids_param(&params)?;
        self.client.star(&entry_ids).await?;

        Ok(json!({ "status": "ok", "starred": entry_ids }).to_string())
    }
}

/// Tool for removing stars from entries
pub struct UnstarEntriesTool {
    client: Arc<FeedbinClient>,
}

impl UnstarEntriesTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for UnstarEntriesTool {
    fn name(&self) -> &str {
        "unstar_entries"
    }

    fn description(&self) -> &str {
        "Unstar (remove the bookmark from) one or more entries"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "entry_ids": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "List of entry IDs to unstar"
                }
            },
            "required": ["entry_ids"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let entry_ids = entry_ids_param(&params)?;
        self.client.unstar(&entry_ids).await?;

        Ok(json!({ "status": "ok", "unstarred": entry_ids }).to_string())
    }
}
