//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analyzer to AI assistants over stdio. Tools delegate to the
//! same core functions the CLI and HTTP API use, so a tool call returns the
//! same JSON document as `POST /analyze`.
//!
//! # Tools
//!
//! - `get_info`: package name and version
//! - `analyze_text`: metrics, feedback and the echoed method label
//! - `count_syllables`: per-word syllable estimates and complexity flags

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use clarimeter_core::config::Config;
use clarimeter_core::service::{self, AnalyzeRequest};

use crate::commands::syllables;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Method label to echo back (e.g. "clarity_index", "gunning_fog").
    pub method: Option<String>,
}

/// Parameters for the `count_syllables` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountSyllablesParams {
    /// Words to score.
    pub words: Vec<String>,
}

/// MCP server exposing readability analysis to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    default_method: Option<String>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default settings.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a server using the configured default method and input limit.
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_method: config.default_method.clone(),
            max_input_bytes: config.input_limit(),
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score readability and generate feedback.
    #[tool(
        description = "Analyze text readability. Returns counts, averages, five readability indices (clarity_index, gunning_fog, infogineering_index, flesch_reading_ease, flesch_kincaid_grade), rule-based feedback, and the selected method label."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", method = ?params.method, "executing MCP tool");

        let request = AnalyzeRequest {
            text: Some(params.text),
            method: params.method,
        };
        let response = service::evaluate(
            &request,
            self.default_method.as_deref(),
            self.max_input_bytes,
        )
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_text",
            words = response.metrics.words,
            confidence = %response.ai_feedback.confidence,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Estimate syllables per word.
    #[tool(
        description = "Estimate syllable counts for words and flag which ones count as complex."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_syllables(
        &self,
        Parameters(params): Parameters<CountSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "count_syllables", count = params.words.len(), "executing MCP tool");

        let scores: Vec<_> = params.words.iter().map(|w| syllables::score(w)).collect();
        let json = serde_json::to_string_pretty(&scores)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text to score readability and get writing feedback.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains("analyze_text"));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn call_json(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = call_json(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: default_format(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn analyze_text_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: "The cat sat. The dog ran.".to_string(),
            method: Some("gunning_fog".to_string()),
        });

        let result = server
            .analyze_text(params)
            .expect("analyze_text should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let json = call_json(&result);
        assert_eq!(json["metrics"]["words"], 6);
        assert_eq!(json["metrics"]["gunning_fog"], 1.2);
        assert_eq!(json["selected_method"], "gunning_fog");
        assert_eq!(json["ai_feedback"]["suggestions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn analyze_text_uses_configured_default_method() {
        let config = Config {
            default_method: Some("flesch_reading_ease".to_string()),
            ..Config::default()
        };
        let server = ProjectServer::from_config(&config);
        let params = Parameters(AnalyzeTextParams {
            text: "The cat sat.".to_string(),
            method: None,
        });

        let result = server.analyze_text(params).unwrap();
        assert_eq!(call_json(&result)["selected_method"], "flesch_reading_ease");
    }

    #[test]
    fn analyze_text_rejects_blank_text() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: "  \n ".to_string(),
            method: None,
        });

        let err = server.analyze_text(params).unwrap_err();
        assert!(err.message.contains("Empty text provided"));
    }

    #[test]
    fn analyze_text_rejects_unscorable_text() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: "???".to_string(),
            method: None,
        });

        let err = server.analyze_text(params).unwrap_err();
        assert!(err.message.contains("Unable to analyze text"));
    }

    #[test]
    fn count_syllables_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(CountSyllablesParams {
            words: vec!["cat".to_string(), "banana".to_string()],
        });

        let result = server.count_syllables(params).unwrap();
        let json = call_json(&result);
        assert_eq!(json[0]["syllables"], 1);
        assert_eq!(json[1]["syllables"], 3);
        assert_eq!(json[1]["complex"], true);
    }
}
