//! MCP request handling: maps JSON-RPC methods onto the query dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info};

use super::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, SUPPORTED_PROTOCOL_VERSIONS,
};
use super::tools::{ResourceDescriptor, ToolCall, tool_descriptors};
use crate::config::{ResourceConfig, ServerConfig, ServerInfoConfig};
use crate::dispatch::{QueryDispatcher, ToolResponse};
use crate::error::{Result, RulesError};

/// Stateless handler shared by every in-flight request.
pub struct McpHandler {
    dispatcher: QueryDispatcher,
    info: ServerInfoConfig,
    resources: ResourceConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitializeParams {
    #[serde(default)]
    protocol_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ReadResourceParams {
    uri: String,
}

#[derive(Debug, Serialize)]
struct TextContent {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CallToolResult {
    content: Vec<TextContent>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_error: bool,
}

impl From<ToolResponse> for CallToolResult {
    fn from(response: ToolResponse) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text",
                text: response.text,
            }],
            is_error: response.is_error,
        }
    }
}

impl McpHandler {
    pub fn new(dispatcher: QueryDispatcher, config: &ServerConfig) -> Self {
        Self {
            dispatcher,
            info: config.server.clone(),
            resources: config.resources.clone(),
        }
    }

    /// Handle one request. Notifications never produce a response.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match self.dispatch(&request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(MethodError::NotFound) => JsonRpcResponse::failure(
                id,
                JsonRpcError::new(
                    METHOD_NOT_FOUND,
                    format!("Method not found: {}", request.method),
                ),
            ),
            Err(MethodError::Failed(e)) => {
                debug!(method = %request.method, error = %e, "Request failed");
                JsonRpcResponse::failure(id, JsonRpcError::from(&e))
            }
        };
        Some(response)
    }

    async fn dispatch(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> std::result::Result<Value, MethodError> {
        let result = match method {
            "initialize" => self.initialize(params),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tool_descriptors() })),
            "tools/call" => self.call_tool(params).await,
            "resources/list" => Ok(json!({ "resources": self.resource_descriptors() })),
            "resources/templates/list" => Ok(json!({ "resourceTemplates": [] })),
            "resources/read" => self.read_resource(params).await,
            _ => return Err(MethodError::NotFound),
        };
        result.map_err(MethodError::Failed)
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value> {
        let params: InitializeParams = decode_params(params)?;
        let protocol_version = params
            .protocol_version
            .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(&v.as_str()))
            .unwrap_or_else(|| SUPPORTED_PROTOCOL_VERSIONS[0].to_string());

        info!(protocol_version = %protocol_version, "Client initialized");
        Ok(json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {},
                "resources": {}
            },
            "serverInfo": {
                "name": self.info.name,
                "version": self.info.version
            }
        }))
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value> {
        let params: CallToolParams = decode_params(params)?;
        let call = ToolCall::parse(&params.name, params.arguments)?;

        let response = self.run_tool(&call).await;
        info!(tool = call.name(), is_error = response.is_error, "Tool call");

        Ok(serde_json::to_value(CallToolResult::from(response))?)
    }

    /// Run a decoded tool call. Lookup failures become error-flagged responses.
    pub async fn run_tool(&self, call: &ToolCall) -> ToolResponse {
        let result = match call {
            ToolCall::ListRules => self.dispatcher.list_rules_json(),
            ToolCall::GetRule(args) => self.dispatcher.get_rule(&args.rule_id).await,
            ToolCall::AuditChecklist(args) => self.dispatcher.audit_checklist(&args.domain).await,
        };
        ToolResponse::from(result)
    }

    pub fn resource_descriptors(&self) -> Vec<ResourceDescriptor> {
        self.dispatcher
            .catalog()
            .entries()
            .iter()
            .map(|entry| ResourceDescriptor::for_entry(entry, &self.resources))
            .collect()
    }

    async fn read_resource(&self, params: Option<Value>) -> Result<Value> {
        let params: ReadResourceParams = decode_params(params)?;
        let entry = self
            .dispatcher
            .catalog()
            .entries()
            .iter()
            .find(|entry| entry.resource_uri(&self.resources.scheme) == params.uri)
            .ok_or_else(|| RulesError::UnknownResource(params.uri.clone()))?;

        let text = self.dispatcher.read_domain(entry.domain).await?;
        debug!(uri = %params.uri, bytes = text.len(), "Resource read");

        Ok(json!({
            "contents": [{
                "uri": params.uri,
                "mimeType": self.resources.mime_type,
                "text": text
            }]
        }))
    }
}

enum MethodError {
    NotFound,
    Failed(RulesError),
}

fn decode_params<T: serde::de::DeserializeOwned>(params: Option<Value>) -> Result<T> {
    let params = params.unwrap_or_else(|| Value::Object(Default::default()));
    serde_json::from_value(params).map_err(|e| RulesError::InvalidParams(e.to_string()))
}
