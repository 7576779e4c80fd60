use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool as McpTool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use tracing::debug;

use crate::tools::ToolRegistry;

/// MCP server exposing the tool registry over the model context protocol.
///
/// The handler is a pure bridge: `tools/list` maps the registry, and
/// `tools/call` dispatches to [`Tool::execute`](crate::Tool::execute). Tool
/// failures come back as error results, not protocol errors.
pub struct FeedbinServer {
    registry: ToolRegistry,
}

impl FeedbinServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }
}

impl ServerHandler for FeedbinServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Tools for reading and managing a Feedbin account: subscriptions, \
                 entries, read/unread state, stars, and tags."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let mut tools: Vec<McpTool> = self
            .registry
            .all()
            .into_iter()
            .map(|tool| {
                let schema = tool.schema().as_object().cloned().unwrap_or_default();
                McpTool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    Arc::new(schema),
                )
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(ListToolsResult {
            next_cursor: None,
            tools,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let tool = self.registry.get(&request.name).ok_or_else(|| {
            ErrorData::invalid_params(format!("unknown tool: {}", request.name), None)
        })?;

        let params = request
            .arguments
            .map(Value::Object)
            .unwrap_or_else(|| Value::Object(Default::default()));

        debug!(tool = %request.name, "dispatching tool call");
        match tool.execute(params).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "{:#}",
                e
            ))])),
        }
    }
}
