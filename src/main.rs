use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use secure_coding_mcp::cli::{Cli, Commands};
use secure_coding_mcp::config::ServerConfig;
use secure_coding_mcp::dispatch::{QueryDispatcher, ToolResponse};
use secure_coding_mcp::error::Result;
use secure_coding_mcp::output::OutputWriter;
use secure_coding_mcp::server::{McpHandler, serve_stdio};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let format = cli.output;
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            OutputWriter::new(format).emit_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr: stdout carries the protocol when serving.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("secure_coding_mcp=debug")
        } else {
            EnvFilter::new("secure_coding_mcp=info")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = ServerConfig::load(cli.config.as_deref()).await?;
    let dispatcher = QueryDispatcher::bootstrap(&config, cli.rules_dir.as_deref()).await?;
    let writer = OutputWriter::new(cli.output);

    match cli.command_or_default() {
        Commands::Serve => cmd_serve(dispatcher, &config).await,
        Commands::List => {
            writer.emit_domains(&dispatcher.list_rules());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Get { rule_id } => {
            let response = ToolResponse::from(dispatcher.get_rule(&rule_id).await);
            Ok(exit_code(writer.emit_response(&response)))
        }
        Commands::Checklist { domain } => cmd_checklist(&writer, &dispatcher, &domain).await,
        Commands::Resources => {
            let handler = McpHandler::new(dispatcher, &config);
            writer.emit_resources(&handler.resource_descriptors());
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn cmd_serve(dispatcher: QueryDispatcher, config: &ServerConfig) -> Result<ExitCode> {
    let handler = Arc::new(McpHandler::new(dispatcher, config));
    serve_stdio(handler).await?;
    Ok(ExitCode::SUCCESS)
}

async fn cmd_checklist(
    writer: &OutputWriter,
    dispatcher: &QueryDispatcher,
    domain: &str,
) -> Result<ExitCode> {
    match dispatcher.checklist_records(domain).await {
        Ok(records) => {
            writer.emit_checklist(&records);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_caller_error() => {
            writer.emit_error(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
