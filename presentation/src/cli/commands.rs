//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for toolhost_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => toolhost_domain::OutputFormat::Text,
            OutputFormat::Json => toolhost_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for toolhost
#[derive(Parser, Debug)]
#[command(name = "toolhost")]
#[command(author, version, about = "Load DOCX documents and run builtin tools")]
#[command(long_about = r#"
toolhost hosts two integration pieces:

1. load: split a DOCX file into pages and print the aggregated text
2. tool: run a builtin tool call and print its result envelope

Configuration files are loaded from (in priority order):
1. TOOLHOST_* environment variables (e.g. TOOLHOST_SEARCH__BASE_URL)
2. --config <path>                  Explicit config file
3. ./toolhost.toml                  Project-level config
4. ~/.config/toolhost/config.toml   Global config

Example:
  toolhost load report.docx --pages
  toolhost tool lobe-web-browsing search '{"query":"rust async"}'
  toolhost tool lobe-web-browsing crawlMultiPages '{"urls":["https://a.example","https://b.example"]}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable configuration discovery; with --config, only that file is read
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a DOCX file and print its text
    Load {
        /// Path to the .docx file
        path: PathBuf,

        /// Print each page separately with its counts
        #[arg(long)]
        pages: bool,
    },

    /// Execute a builtin tool call
    Tool {
        /// Builtin tool identifier (e.g. lobe-web-browsing)
        identifier: String,

        /// API to invoke (search, crawlSinglePage, crawlMultiPages)
        api_name: String,

        /// Arguments as a JSON object; malformed JSON is treated as {}
        #[arg(default_value = "{}")]
        arguments: String,

        /// Topic id passed through in the execution context
        #[arg(long, value_name = "ID")]
        topic_id: Option<String>,

        /// User id passed through in the execution context
        #[arg(long, value_name = "ID")]
        user_id: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_config_accepts_explicit_path() {
        let cli = Cli::parse_from([
            "toolhost",
            "--no-config",
            "--config",
            "only.toml",
            "load",
            "report.docx",
        ]);
        assert!(cli.no_config);
        assert_eq!(cli.config, Some(PathBuf::from("only.toml")));
        assert!(matches!(cli.command, Some(Command::Load { .. })));
    }

    #[test]
    fn test_parse_tool_command() {
        let cli = Cli::parse_from([
            "toolhost",
            "-vv",
            "tool",
            "lobe-web-browsing",
            "search",
            r#"{"query":"rust"}"#,
            "--topic-id",
            "t1",
            "-o",
            "json",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Some(Command::Tool {
                identifier,
                api_name,
                arguments,
                topic_id,
                user_id,
            }) => {
                assert_eq!(identifier, "lobe-web-browsing");
                assert_eq!(api_name, "search");
                assert_eq!(arguments, r#"{"query":"rust"}"#);
                assert_eq!(topic_id.as_deref(), Some("t1"));
                assert!(user_id.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_tool_arguments_default_to_empty_object() {
        let cli = Cli::parse_from(["toolhost", "tool", "lobe-web-browsing", "crawlMultiPages"]);
        match cli.command {
            Some(Command::Tool { arguments, .. }) => assert_eq!(arguments, "{}"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_load_command() {
        let cli = Cli::parse_from(["toolhost", "load", "report.docx", "--pages"]);
        assert_eq!(cli.output, OutputFormat::Text);
        match cli.command {
            Some(Command::Load { path, pages }) => {
                assert_eq!(path, PathBuf::from("report.docx"));
                assert!(pages);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
