//! Configuration types and loading.
//!
//! - `ServerConfig`: top-level settings with validation
//! - `ServerInfoConfig`, `CorpusConfig`, `ResourceConfig`: per-section settings

mod settings;

pub use settings::{
    CorpusConfig, DEFAULT_RESOURCE_SCHEME, DEFAULT_SERVER_NAME, MARKDOWN_MIME_TYPE,
    ResourceConfig, ServerConfig, ServerInfoConfig,
};
