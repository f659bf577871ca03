//! MCP server over stdio.
//!
//! - `protocol`: JSON-RPC 2.0 framing and error codes
//! - `tools`: tool/resource descriptors and argument decoding
//! - `McpHandler`: method routing onto the query dispatcher
//! - `serve`/`serve_stdio`: line-oriented transport loop

mod handler;
mod protocol;
mod tools;
mod transport;

pub use handler::McpHandler;
pub use protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, RESOURCE_NOT_FOUND,
    SUPPORTED_PROTOCOL_VERSIONS, parse_message,
};
pub use tools::{
    AUDIT_CHECKLIST, AuditChecklistArgs, GET_RULE, GetRuleArgs, LIST_RULES, ListRulesArgs,
    ResourceDescriptor, ToolCall, ToolDescriptor, tool_descriptors,
};
pub use transport::{serve, serve_stdio};
