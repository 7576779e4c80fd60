mod entries;
mod registry;
mod starred;
mod subscriptions;
mod tags;
mod unread;

pub use entries::{
    GetEntriesTool, GetEntryTool, GetReadEntriesTool, GetStarredEntriesTool, GetUnreadEntriesTool,
};
pub use registry::ToolRegistry;
pub use starred::{GetStarredEntryIdsTool, StarEntriesTool, UnstarEntriesTool};
pub use subscriptions::{GetFeedTool, GetSubscriptionsTool};
pub use tags::{GetTaggingsTool, GetTagsTool};
pub use unread::{GetUnreadEntryIdsTool, MarkEntriesReadTool, MarkEntriesUnreadTool};

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::api::FeedbinClient;

/// A tool that can be executed by an agent host
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool
    fn name(&self) -> &str;

    /// A description of what this tool does
    fn description(&self) -> &str;

    /// JSON schema for the tool's parameters
    fn schema(&self) -> Value;

    /// Execute the tool with the given parameters
    async fn execute(&self, params: Value) -> Result<String>;
}

/// Build the full Feedbin tool registry over a shared client.
pub fn registry(client: Arc<FeedbinClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(GetSubscriptionsTool::new(client.clone()));
    registry.register(GetFeedTool::new(client.clone()));
    registry.register(GetUnreadEntriesTool::new(client.clone()));
    registry.register(GetReadEntriesTool::new(client.clone()));
    registry.register(GetStarredEntriesTool::new(client.clone()));
    registry.register(GetEntriesTool::new(client.clone()));
    registry.register(GetEntryTool::new(client.clone()));
    registry.register(GetUnreadEntryIdsTool::new(client.clone()));
    registry.register(MarkEntriesReadTool::new(client.clone()));
    registry.register(MarkEntriesUnreadTool::new(client.clone()));
    registry.register(GetStarredEntryIdsTool::new(client.clone()));
    registry.register(StarEntriesTool::new(client.clone()));
    registry.register(UnstarEntriesTool::new(client.clone()));
    registry.register(GetTagsTool::new(client.clone()));
    registry.register(GetTaggingsTool::new(client));
    registry
}

/// Extract the required 'entry_ids' integer-array parameter used by the
/// bulk read/star mutations.
fn entry_ids_param(params: &Value) -> Result<Vec<i64>> {
    let items = params["entry_ids"]
        .as_array()
        .context("missing 'entry_ids' parameter")?;
    items
        .iter()
        .map(|item| {
            item.as_i64()
                .context("'entry_ids' must be an array of integers")
        })
        .collect()
}
