//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{CheckSuspensionParams, check_impl, list_impl};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use typhoon_client::StatusFetcher;

/// The main MCP server handler for mcp-tw-typhoon.
#[derive(Clone)]
pub struct TyphoonServer {
    tool_router: ToolRouter<Self>,
    fetcher: StatusFetcher,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl TyphoonServer {
    /// Create a new server handler around a fetcher.
    pub fn new(fetcher: StatusFetcher) -> Self {
        Self { tool_router: Self::tool_router(), fetcher }
    }

    /// Check work/school suspension for one city, or summarize all announcements.
    #[tool(
        description = "Check if work and classes are suspended due to natural disasters (e.g., Typhoon) for a specific city in Taiwan. Use this when the user asks 'Is there a typhoon holiday tomorrow?' or 'Is work suspended in Taipei?'."
    )]
    async fn check_suspension(&self, params: Parameters<CheckSuspensionParams>) -> Result<CallToolResult, McpError> {
        check_impl(&self.fetcher, params.0).await
    }

    /// List every city's status.
    #[tool(description = "List the suspension status for all cities/counties in Taiwan.")]
    async fn list_all_suspensions(&self) -> Result<CallToolResult, McpError> {
        list_impl(&self.fetcher).await
    }
}

impl ServerHandler for TyphoonServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mcp-tw-typhoon".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Work and school suspension status for Taiwanese cities and counties, scraped live from the DGPA \
                 announcement page on every call."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        tracing::debug!(tool = %request.name, "call_tool");
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
