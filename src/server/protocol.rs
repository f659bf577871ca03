//! JSON-RPC 2.0 message types for the MCP stdio channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RulesError;

pub const JSONRPC_VERSION: &str = "2.0";

/// Newest first; the first entry is offered when the client asks for
/// something we do not speak.
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", "2024-11-05"];

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;
pub const RESOURCE_NOT_FOUND: i64 = -32002;

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    /// Absent (or null) for notifications.
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&RulesError> for JsonRpcError {
    fn from(err: &RulesError) -> Self {
        let code = match err {
            RulesError::InvalidParams(_) => INVALID_PARAMS,
            RulesError::UnknownResource(_) => RESOURCE_NOT_FOUND,
            _ => INTERNAL_ERROR,
        };
        Self::new(code, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Decode one line of input. Malformed input yields the error response to
/// send back instead of a request.
pub fn parse_message(line: &str) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_str(line).map_err(|e| {
        JsonRpcResponse::failure(Value::Null, JsonRpcError::new(PARSE_ERROR, e.to_string()))
    })?;

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let invalid = |message: &str| {
        JsonRpcResponse::failure(id.clone(), JsonRpcError::new(INVALID_REQUEST, message))
    };

    if !value.is_object() {
        return Err(invalid("Request must be a JSON object"));
    }
    if value.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        return Err(invalid("jsonrpc must be \"2.0\""));
    }

    serde_json::from_value(value).map_err(|e| invalid(&e.to_string()))
}
