//! Text, table, and JSON rendering of pagination results.

use serde::Serialize;
use tabled::{Table, Tabled};

use pagewin_core::error::AppError;
use pagewin_core::{PageItem, PaginationResult};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line page strip
    #[default]
    Text,
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// One table row per rendered item
#[derive(Debug, Tabled)]
pub struct ItemRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Page")]
    page: String,
    #[tabled(rename = "Current")]
    current: &'static str,
}

/// Render a result as a single-line strip, e.g. `‹ 1 2 [3] 4 5 … 15 ›`.
pub fn render_text(result: &PaginationResult) -> String {
    if result.is_empty() {
        return "(single page, no controls)".to_string();
    }

    let mut parts = Vec::with_capacity(result.items.len() + 2);
    if result.previous.is_some() {
        parts.push("‹".to_string());
    }
    parts.extend(result.items.iter().map(|item| match item {
        PageItem::Page {
            page,
            is_current: true,
        } => format!("[{page}]"),
        PageItem::Page { page, .. } => page.to_string(),
        PageItem::Ellipsis => "…".to_string(),
    }));
    if result.next.is_some() {
        parts.push("›".to_string());
    }
    parts.join(" ")
}

/// Build table rows for a result's items.
pub fn item_rows(result: &PaginationResult) -> Vec<ItemRow> {
    result
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| ItemRow {
            position: idx + 1,
            kind: match item {
                PageItem::Page { .. } => "page",
                PageItem::Ellipsis => "ellipsis",
            },
            page: item.page().map_or_else(|| "-".to_string(), |p| p.to_string()),
            current: if item.is_current() { "yes" } else { "" },
        })
        .collect()
}

/// Print a pagination result in the selected format
pub fn print_result(result: &PaginationResult, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => println!("{}", render_text(result)),
        OutputFormat::Table => {
            if result.is_empty() {
                println!("{}", render_text(result));
                return Ok(());
            }
            print_kv("Previous", &link_label(result.previous.map(|l| l.page)));
            print_kv("Next", &link_label(result.next.map(|l| l.page)));
            println!("{}", Table::new(item_rows(result)));
        }
        OutputFormat::Json => print_json(result)?,
    }
    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

fn link_label(page: Option<u64>) -> String {
    page.map_or_else(|| "-".to_string(), |p| format!("page {p}"))
}
