//! One-shot window computation.

use clap::{ArgGroup, Args};

use pagewin_core::compute_window;
use pagewin_core::config::pagination::PaginationConfig;
use pagewin_core::error::AppError;
use pagewin_core::types::total_pages_for;

use super::DisplayArgs;
use crate::output::{self, OutputFormat};

/// Arguments for the window command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("total").required(true).args(["pages", "items"])))]
pub struct WindowArgs {
    /// Current page (1-based); out-of-range values are clamped
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,

    /// Total number of pages
    #[arg(long)]
    pub pages: Option<u64>,

    /// Total number of items; the page count is derived from the page size
    #[arg(long)]
    pub items: Option<u64>,

    /// Items per page, used with --items
    #[arg(long, requires = "items")]
    pub page_size: Option<u64>,

    /// Display constraints
    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Execute the window command
pub fn execute(
    args: &WindowArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let total_pages = resolve_total_pages(args, &config.pagination)?;

    let request = args.display.request(&config.pagination, args.page, total_pages);
    tracing::debug!(?request, "Computing window");

    let result = compute_window(&request);
    output::print_result(&result, format)
}

/// Page count from `--pages`, or from `--items` at the flag or configured page size
fn resolve_total_pages(args: &WindowArgs, config: &PaginationConfig) -> Result<u64, AppError> {
    match (args.pages, args.items) {
        (Some(pages), _) => Ok(pages),
        (None, Some(items)) => {
            let page_size = args.page_size.unwrap_or(config.page_size);
            Ok(total_pages_for(items, page_size))
        }
        (None, None) => Err(AppError::validation("either --pages or --items is required")),
    }
}
