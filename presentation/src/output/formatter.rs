//! Console output for loaded documents and tool results

use colored::Colorize;
use toolhost_domain::{OutputFormat, Page, ToolExecutionResult};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format loaded pages.
    ///
    /// Text output prints the aggregated `content`, or every page with its
    /// counts when `per_page` is set. JSON output always carries both.
    pub fn format_pages(
        pages: &[Page],
        content: &str,
        format: OutputFormat,
        per_page: bool,
    ) -> String {
        match format {
            OutputFormat::Json => Self::to_json(&serde_json::json!({
                "content": content,
                "pages": pages,
            })),
            OutputFormat::Text if per_page => Self::format_page_list(pages),
            OutputFormat::Text => {
                let mut output = String::new();
                for page in pages.iter().filter(|p| p.is_error()) {
                    output.push_str(&Self::error_line(page));
                }
                output.push_str(content);
                output.push('\n');
                output
            }
        }
    }

    fn format_page_list(pages: &[Page]) -> String {
        let mut output = String::new();
        for (index, page) in pages.iter().enumerate() {
            if page.is_error() {
                output.push_str(&Self::error_line(page));
                continue;
            }
            let number = page.metadata.page_number.unwrap_or(index as u32 + 1);
            output.push_str(&format!(
                "{} {}\n{}\n\n",
                format!("── Page {} ──", number).yellow().bold(),
                format!("({} chars, {} lines)", page.char_count, page.line_count).dimmed(),
                page.page_content
            ));
        }
        output
    }

    fn error_line(page: &Page) -> String {
        format!(
            "{} {}\n",
            "Error:".red().bold(),
            page.metadata.error.as_deref().unwrap_or("Unknown")
        )
    }

    /// Format a tool result envelope
    pub fn format_tool_result(result: &ToolExecutionResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::to_json(result),
            OutputFormat::Text if result.is_success() => format!("{}\n", result.content),
            OutputFormat::Text => {
                let message = result.error_message().unwrap_or("Unknown error");
                let mut output = format!("{} {}\n", "Error:".red().bold(), message);
                if !result.content.is_empty() && result.content != message {
                    output.push_str(&result.content);
                    output.push('\n');
                }
                output
            }
        }
    }

    fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}
