use serde::Serialize;

use crate::error::Result;

/// Uniform response shape: a text payload plus a flag telling callers whether
/// it describes a failure. Error responses never carry partial content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResponse {
    pub text: String,
    pub is_error: bool,
}

impl ToolResponse {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl From<Result<String>> for ToolResponse {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => Self::ok(text),
            Err(e) => Self::error(e.to_string()),
        }
    }
}
