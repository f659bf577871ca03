use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "secure-coding-mcp")]
#[command(author, version, about = "OWASP secure coding rules over MCP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Rules directory, searched before the built-in locations
    #[arg(long, global = true, env = "SECURE_CODING_RULES_DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "SECURE_CODING_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The subcommand to run; serving is the default.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

/// Output format for one-shot commands.
/// - Text: Human-readable text output (default)
/// - Json: Single JSON document
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Serve rules over MCP on stdin/stdout (default)
    Serve,

    /// List available rule domains
    List,

    /// Show a rule by ID (e.g. INPUT-01) or a whole domain (e.g. input-validation)
    Get {
        /// Rule ID or domain name
        rule_id: String,
    },

    /// Show the audit checklist for a domain
    Checklist {
        /// Domain name (e.g. api-security)
        domain: String,
    },

    /// List served resource URIs
    Resources,
}
