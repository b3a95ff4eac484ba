//! CLI entrypoint for toolhost
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::path::Path;
use std::sync::Arc;
use toolhost_application::{BuiltinToolsExecutor, DocumentLoaderPort, ToolExecutorPort};
use toolhost_domain::{ConfigIssue, OutputFormat, Page, ToolExecutionContext, ToolPayload};
use toolhost_infrastructure::{ConfigLoader, DocxLoader, FileConfig, HttpSearchService};
use toolhost_presentation::{Cli, Command, ConsoleFormatter};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = match (cli.no_config, cli.config.as_ref()) {
        (true, None) => ConfigLoader::load_defaults(),
        (true, Some(path)) => ConfigLoader::load_file(path)
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?,
        (false, path) => ConfigLoader::load(path)
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?,
    };
    info!("Starting toolhost");

    let format: OutputFormat = cli.output.into();
    let succeeded = match command {
        Command::Load { path, pages } => {
            check_config(&config.validate(), false)?;
            run_load(&config, &path, format, pages).await
        }
        Command::Tool {
            identifier,
            api_name,
            arguments,
            topic_id,
            user_id,
        } => {
            check_config(&config.validate(), true)?;
            let payload = ToolPayload::new(identifier, api_name, arguments);
            let mut context = ToolExecutionContext::new();
            if let Some(topic_id) = topic_id {
                context = context.with_topic_id(topic_id);
            }
            if let Some(user_id) = user_id {
                context = context.with_user_id(user_id);
            }
            run_tool(&config, &payload, &context, format).await?
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

/// Log config issues; fail on any error-severity issue.
fn check_config(issues: &[ConfigIssue], show_warnings: bool) -> Result<()> {
    let mut errors = 0;
    for issue in issues {
        if issue.is_error() {
            error!("{}", issue.message);
            errors += 1;
        } else if show_warnings {
            warn!("{}", issue.message);
        }
    }
    if errors > 0 {
        bail!("Invalid configuration ({} error(s))", errors);
    }
    Ok(())
}

async fn run_load(config: &FileConfig, path: &Path, format: OutputFormat, per_page: bool) -> bool {
    let loader = DocxLoader::new().with_max_file_size(config.document.max_file_size);

    let pages = loader.load_pages(path).await;
    let content = loader.aggregate_content(&pages);

    print!(
        "{}",
        ConsoleFormatter::format_pages(&pages, &content, format, per_page)
    );
    !pages.iter().any(Page::is_error)
}

async fn run_tool(
    config: &FileConfig,
    payload: &ToolPayload,
    context: &ToolExecutionContext,
    format: OutputFormat,
) -> Result<bool> {
    // === Dependency Injection ===
    let search_service = Arc::new(HttpSearchService::new(&config.search)?);
    let executor = BuiltinToolsExecutor::new(search_service);

    let result = executor.execute(payload, context).await;

    print!("{}", ConsoleFormatter::format_tool_result(&result, format));
    Ok(result.is_success())
}
