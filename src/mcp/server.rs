//! Core MCP server implementation.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use serde::Serialize;

use super::tools::classify::{run_classify, ClassifyNodeInput};
use super::tools::scan::{run_find_charts, FindChartsInput};
use crate::config::FigmaConfig;

/// The figma-mcp MCP Server
///
/// Exposes chart/illustration detection as MCP tools. Thresholds come from
/// the configuration loaded at startup and can be overridden per call.
#[derive(Debug, Clone)]
pub struct FigmaMcpServer {
    config: FigmaConfig,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FigmaMcpServer {
    pub fn new(config: FigmaConfig) -> Self {
        Self { config, tool_router: Self::tool_router() }
    }

    #[tool(
        name = "figma_classify_node",
        description = "Decide whether a Figma node is a chart or illustration (export as image) \
                       rather than an icon or layout. Returns is_chart and the deciding reason."
    )]
    async fn classify_node(
        &self,
        Parameters(input): Parameters<ClassifyNodeInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(run_classify(input, &self.config.classifier)))
    }

    #[tool(
        name = "figma_find_charts",
        description = "Walk a Figma node tree (bare node, file response, or nodes response) and \
                       list every chart or illustration with its layer path."
    )]
    async fn find_charts(
        &self,
        Parameters(input): Parameters<FindChartsInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(run_find_charts(input, &self.config)))
    }
}

/// Malformed input becomes an error result, never a negative classification.
fn to_tool_result<T: Serialize>(result: Result<T, String>) -> CallToolResult {
    match result.and_then(|value| serde_json::to_string_pretty(&value).map_err(|e| e.to_string()))
    {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(message) => {
            tracing::warn!(%message, "tool call rejected");
            CallToolResult::error(vec![Content::text(message)])
        }
    }
}

#[tool_handler]
impl ServerHandler for FigmaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "figma-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Figma MCP server: use figma_classify_node on a node JSON to decide whether \
                 it should be exported as an image (chart or illustration), and \
                 figma_find_charts to locate all such nodes in a document."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server on stdin/stdout
pub async fn run_server(config: FigmaConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        min_dimension = config.classifier.min_dimension,
        min_vector_children = config.classifier.min_vector_children,
        "starting MCP server on stdio"
    );
    let server = FigmaMcpServer::new(config);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
