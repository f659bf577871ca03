//! Tool and resource descriptors advertised to MCP clients.

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::catalog::CatalogEntry;
use crate::config::ResourceConfig;
use crate::error::{Result, RulesError};

pub const LIST_RULES: &str = "list_rules";
pub const GET_RULE: &str = "get_rule";
pub const AUDIT_CHECKLIST: &str = "audit_checklist";

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListRulesArgs {}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRuleArgs {
    /// A rule ID like "INPUT-01" or a domain name like "input-validation"
    pub rule_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AuditChecklistArgs {
    /// A domain name like "input-validation" or "api-security"
    pub domain: String,
}

/// A decoded `tools/call` request.
#[derive(Debug)]
pub enum ToolCall {
    ListRules,
    GetRule(GetRuleArgs),
    AuditChecklist(AuditChecklistArgs),
}

impl ToolCall {
    pub fn parse(name: &str, arguments: Option<Value>) -> Result<Self> {
        match name {
            LIST_RULES => Ok(Self::ListRules),
            GET_RULE => Ok(Self::GetRule(decode_args(name, arguments)?)),
            AUDIT_CHECKLIST => Ok(Self::AuditChecklist(decode_args(name, arguments)?)),
            other => Err(RulesError::InvalidParams(format!("Unknown tool: {}", other))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ListRules => LIST_RULES,
            Self::GetRule(_) => GET_RULE,
            Self::AuditChecklist(_) => AUDIT_CHECKLIST,
        }
    }
}

fn decode_args<T: DeserializeOwned>(tool: &str, arguments: Option<Value>) -> Result<T> {
    let arguments = arguments.unwrap_or_else(|| Value::Object(Default::default()));
    serde_json::from_value(arguments)
        .map_err(|e| RulesError::InvalidParams(format!("{}: {}", tool, e)))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: LIST_RULES,
            description: "List all available OWASP secure coding rule domains with their prefixes and descriptions",
            input_schema: input_schema::<ListRulesArgs>(),
        },
        ToolDescriptor {
            name: GET_RULE,
            description: "Get a specific rule by ID (e.g. INPUT-01) or an entire domain file (e.g. input-validation)",
            input_schema: input_schema::<GetRuleArgs>(),
        },
        ToolDescriptor {
            name: AUDIT_CHECKLIST,
            description: "Get a structured audit checklist (Rule ID, Rule, Verification) for a security domain",
            input_schema: input_schema::<AuditChecklistArgs>(),
        },
    ]
}

/// Object schema for tool arguments, without the `$schema`/`title` noise.
fn input_schema<T: JsonSchema>() -> Value {
    let mut value = schema_for!(T).to_value();
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
        object
            .entry("type")
            .or_insert_with(|| Value::String("object".into()));
        object
            .entry("properties")
            .or_insert_with(|| Value::Object(Default::default()));
    }
    value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

impl ResourceDescriptor {
    pub fn for_entry(entry: &CatalogEntry, config: &ResourceConfig) -> Self {
        Self {
            uri: entry.resource_uri(&config.scheme),
            name: entry.domain.to_string(),
            description: entry.label(),
            mime_type: config.mime_type.clone(),
        }
    }
}
