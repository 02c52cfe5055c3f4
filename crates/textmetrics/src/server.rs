//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the text metrics engine over MCP so AI assistants can score copy
//! while drafting it.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same [`Analyzer`]
//! the CLI builds from configuration; tools only check input size, delegate,
//! and serialize.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use textmetrics_core::{Analyzer, markdown, stats};

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

/// Parameters for the `analyze_keywords` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeKeywordsParams {
    /// The copy to analyze.
    pub text: String,
    /// Optional target keyword; its density is read from the ranked keyword table.
    pub target_keyword: Option<String>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to analyze.
    pub text: String,
    /// Minimum acceptable Flesch Reading Ease score (0-100).
    pub min_score: Option<f64>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `text_statistics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextStatisticsParams {
    /// The text to count.
    pub text: String,
    /// Whether to strip markdown formatting before counting.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `word_frequency` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WordFrequencyParams {
    /// The text to count.
    pub text: String,
    /// Return only the N most frequent words.
    pub limit: Option<usize>,
    /// Whether to strip markdown formatting before counting.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// MCP server exposing text metrics to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    analyzer: Arc<Analyzer>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

fn prepare(text: &str, strip_markdown: bool) -> String {
    if strip_markdown {
        markdown::extract_copy(text)
    } else {
        text.to_string()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default stop words, tuning, and input limit.
    pub fn new() -> Self {
        Self::with_analyzer(
            Arc::new(Analyzer::default()),
            Some(textmetrics_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }

    /// Create a server around a configured analyzer.
    pub fn with_analyzer(analyzer: Arc<Analyzer>, max_input_bytes: Option<usize>) -> Self {
        Self {
            analyzer,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        textmetrics_core::check_input_size(text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
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
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Keyword density, phrases, readability, and recommendations.
    #[tool(
        description = "Analyze web copy for SEO: keyword and phrase density with status bands, Flesch reading ease, optional target keyword density, and recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_keywords(
        &self,
        Parameters(params): Parameters<AnalyzeKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_keywords",
            target = ?params.target_keyword,
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let copy = prepare(&params.text, params.strip_markdown);
        let result = self
            .analyzer
            .analyze(&copy, params.target_keyword.as_deref());
        let json = to_json(&result)?;

        tracing::info!(
            tool = "analyze_keywords",
            total_words = result.total_words,
            recommendations = result.recommendations.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Score readability using Flesch Reading Ease.
    #[tool(
        description = "Check readability of text. Returns Flesch Reading Ease score (0-100, higher is easier), reading level, and counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_readability",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report =
            self.analyzer
                .readability(&params.text, params.strip_markdown, params.min_score);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "check_readability",
            score = report.score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Word counter statistics.
    #[tool(
        description = "Count characters, words, sentences, and paragraphs. Returns reading and speaking time estimates."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn text_statistics(
        &self,
        Parameters(params): Parameters<TextStatisticsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "text_statistics", "executing MCP tool");
        self.check_size(&params.text)?;

        let report = stats::text_statistics(&prepare(&params.text, params.strip_markdown));
        let json = to_json(&report)?;

        tracing::info!(tool = "text_statistics", words = report.words, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Full word frequency table.
    #[tool(
        description = "List every word with its count, most frequent first. Stop words are included."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn word_frequency(
        &self,
        Parameters(params): Parameters<WordFrequencyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "word_frequency", limit = ?params.limit, "executing MCP tool");
        self.check_size(&params.text)?;

        let mut report = self
            .analyzer
            .word_frequency(&prepare(&params.text, params.strip_markdown));
        if let Some(limit) = params.limit {
            report.entries.truncate(limit);
        }
        let json = to_json(&report)?;

        tracing::info!(
            tool = "word_frequency",
            unique_words = report.unique_words,
            "MCP tool completed"
        );
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
                "{} MCP server. Use analyze_keywords for keyword density and recommendations, \
                 check_readability for reading ease, text_statistics and word_frequency for counts.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const COPY: &str = "Cloud hosting is fast. Cloud hosting is cheap. Choose cloud hosting today!";

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn tool_parameter_schema_lists_fields() {
        let schema = schemars::schema_for!(AnalyzeKeywordsParams);
        let props = &schema.as_value()["properties"];
        assert!(props.get("text").is_some());
        assert!(props.get("target_keyword").is_some());
        assert!(props.get("strip_markdown").is_some());
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn extract_json(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("output should be valid JSON")
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = extract_json(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn analyze_keywords_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeKeywordsParams {
            text: COPY.to_string(),
            target_keyword: Some("cloud hosting".to_string()),
            strip_markdown: false,
        });

        let result = server
            .analyze_keywords(params)
            .expect("analyze_keywords should succeed");
        let json = extract_json(&result);
        assert_eq!(json["totalWords"], 12);
        assert_eq!(json["keywords"][0]["term"], "cloud");
        assert_eq!(json["keywords"][0]["status"], "keyword-stuffing");
        assert_eq!(json["targetKeyword"]["occurrences"], 3);
        assert_eq!(json["targetKeyword"]["ranked"], false);
        assert!(json["recommendations"].as_array().unwrap().len() >= 2);
    }

    #[test]
    fn analyze_keywords_strips_markdown() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeKeywordsParams {
            text: "# Hosting\n\n```\nlet code = 1;\n```\n\nFast **cloud** hosting.".to_string(),
            target_keyword: None,
            strip_markdown: true,
        });

        let json = extract_json(&server.analyze_keywords(params).unwrap());
        assert_eq!(json["totalWords"], 4);
        let terms: Vec<&str> = json["keywords"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|k| k["term"].as_str())
            .collect();
        assert!(!terms.contains(&"code"));
    }

    #[test]
    fn check_readability_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(CheckReadabilityParams {
            text: "The cat sat on the mat. The dog ran fast.".to_string(),
            min_score: Some(60.0),
            strip_markdown: false,
        });

        let result = server
            .check_readability(params)
            .expect("check_readability should succeed");
        let json = extract_json(&result);
        assert!(json["score"].as_f64().unwrap() > 90.0);
        assert_eq!(json["level"], "very-easy");
        assert_eq!(json["below_min"], false);
    }

    #[test]
    fn text_statistics_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(TextStatisticsParams {
            text: "One two three. Four five!\n\nSix.".to_string(),
            strip_markdown: false,
        });

        let json = extract_json(&server.text_statistics(params).unwrap());
        assert_eq!(json["words"], 6);
        assert_eq!(json["sentences"], 3);
        assert_eq!(json["paragraphs"], 2);
        assert_eq!(json["readingTimeMinutes"], 1);
    }

    #[test]
    fn word_frequency_tool_respects_limit() {
        let server = ProjectServer::new();
        let params = Parameters(WordFrequencyParams {
            text: "the cat and the hat and the bat".to_string(),
            limit: Some(2),
            strip_markdown: false,
        });

        let json = extract_json(&server.word_frequency(params).unwrap());
        assert_eq!(json["totalWords"], 8);
        assert_eq!(json["uniqueWords"], 5);
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["word"], "the");
        assert_eq!(entries[0]["count"], 3);
        assert_eq!(entries[1]["word"], "and");
    }

    #[test]
    fn oversized_input_is_invalid_params() {
        let server = ProjectServer::with_analyzer(Arc::new(Analyzer::default()), Some(10));
        let params = Parameters(AnalyzeKeywordsParams {
            text: COPY.to_string(),
            target_keyword: None,
            strip_markdown: false,
        });

        let err = server.analyze_keywords(params).unwrap_err();
        assert!(err.message.contains("input too large"));
    }
}
