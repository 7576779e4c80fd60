use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

use super::{Tool, entry_ids_param};
use crate::api::FeedbinClient;

fn entry_ids_schema(action: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "entry_ids": {
                "type": "array",
                "items": { "type": "integer" },
                "description": format!("List of entry IDs to {}", action)
            }
        },
        "required": ["entry_ids"]
    })
}

/// Tool for listing every unread entry id
pub struct GetUnreadEntryIdsTool {
    client: Arc<FeedbinClient>,
}

impl GetUnreadEntryIdsTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetUnreadEntryIdsTool {
    fn name(&self) -> &str {
        "get_unread_entry_ids"
    }

    fn description(&self) -> &str {
        "Get the flat list of all unread entry IDs, cheaper than fetching full entries when only counts or ids are needed"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _params: Value) -> Result<String> {
        Ok(self.client.unread_entry_ids().await?)
    }
}

/// Tool for marking entries as read
pub struct MarkEntriesReadTool {
    client: Arc<FeedbinClient>,
}

impl MarkEntriesReadTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for MarkEntriesReadTool {
    fn name(&self) -> &str {
        "mark_entries_read"
    }

    fn description(&self) -> &str {
        "Mark one or more entries as read"
    }

    fn schema(&self) -> Value {
        entry_ids_schema("mark as read")
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let entry_ids = entry_ids_param(&params)?;
        self.client.mark_read(&entry_ids).await?;

        Ok(json!({ "status": "ok", "marked_read": entry_ids }).to_string())
    }
}

/// Tool for marking entries as unread
pub struct MarkEntriesUnreadTool {
    client: Arc<FeedbinClient>,
}

impl MarkEntriesUnreadTool {
    pub fn new(client: Arc<FeedbinClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for MarkEntriesUnreadTool {
    fn name(&self) -> &str {
        "mark_entries_unread"
    }

    fn description(&self) -> &str {
        "Mark one or more entries as unread"
    }

    fn schema(&self) -> Value {
        entry_ids_schema("mark as unread")
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let entry_ids = entry_ids_param(&params)?;
        self.client.mark_unread(&entry_ids).await?;

        Ok(json!({ "status": "ok", "marked_unread": entry_ids }).to_string())
    }
}
