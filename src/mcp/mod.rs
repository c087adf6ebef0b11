//! MCP server for journeymap: exposes the note parser via the Model
//! Context Protocol.
//!
//! Tools: `parse_notes`, `keyword_tables`.

pub mod params;

use crate::journey::JourneySummary;
use crate::keywords::KeywordTables;
use crate::parse::NoteParser;
use params::*;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ok_text(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn err_text(msg: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg)]))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    match serde_json::to_string_pretty(value) {
        Ok(text) => ok_text(text),
        Err(e) => err_text(format!("failed to serialize result: {}", e)),
    }
}

// ---------------------------------------------------------------------------
// JourneyMcpServer
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct JourneyMcpServer {
    parser: Arc<NoteParser>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JourneyMcpServer {
    pub fn new(parser: NoteParser) -> Self {
        Self {
            parser: Arc::new(parser),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Parse free-text interview notes into a phased journey map (JSON)")]
    fn parse_notes(
        &self,
        Parameters(p): Parameters<ParseNotesParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(e) = crate::require_notes(&p.notes) {
            return err_text(format!("could not generate the map: {}", e));
        }

        let request = p.to_request();
        let (journey, report) = self
            .parser
            .parse_with_report(&request, chrono::Utc::now());

        if p.summary.unwrap_or(false) {
            let summary = JourneySummary::from_journey(&journey);
            to_json(&serde_json::json!({
                "journey": journey,
                "summary": summary,
                "report": report,
            }))
        } else {
            to_json(&journey)
        }
    }

    #[tool(description = "Show the keyword tables the parser matches against")]
    fn keyword_tables(
        &self,
        Parameters(p): Parameters<KeywordTablesParams>,
    ) -> Result<CallToolResult, McpError> {
        let tables: &KeywordTables = self.parser.tables();
        match p.format.as_deref().unwrap_or("yaml") {
            "yaml" => match tables.to_yaml() {
                Ok(yaml) => ok_text(yaml),
                Err(e) => err_text(e.to_string()),
            },
            "json" => to_json(tables),
            other => err_text(format!("unknown format '{}': use 'yaml' or 'json'", other)),
        }
    }
}

#[tool_handler]
impl ServerHandler for JourneyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "journeymap MCP server: turns interview notes into phased journey maps"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run_mcp_server(parser: NoteParser) -> i32 {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    rt.block_on(async {
        let server = JourneyMcpServer::new(parser);

        tracing::info!("journeymap mcp server starting on stdio");

        let service = match server.serve(rmcp::transport::stdio()).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("failed to start MCP server: {}", e);
                return 1;
            }
        };

        if let Err(e) = service.waiting().await {
            eprintln!("MCP server error: {}", e);
            return 1;
        }

        0
    })
}
