//! Interactive page browser.
//!
//! Each step re-derives the controls from the chosen page, the same way a
//! UI host re-renders after a click.

use clap::Args;

use pagewin_core::error::{AppError, ErrorKind};
use pagewin_core::{PageItem, PaginationRequest, PaginationResult, compute_window};

use super::DisplayArgs;
use crate::output;

/// Arguments for the browse command
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Total number of pages
    #[arg(long)]
    pub pages: u64,

    /// Page to start on
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,

    /// Display constraints
    #[command(flatten)]
    pub display: DisplayArgs,
}

/// A selectable navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a page.
    Goto(u64),
    /// Leave the browser.
    Quit,
}

/// Menu entries for a result, paired with the action each one triggers.
pub fn menu(result: &PaginationResult) -> Vec<(String, Action)> {
    let mut entries = Vec::new();
    if let Some(prev) = result.previous {
        entries.push((format!("‹ Previous (page {})", prev.page), Action::Goto(prev.page)));
    }
    if let Some(next) = result.next {
        entries.push((format!("Next › (page {})", next.page), Action::Goto(next.page)));
    }
    entries.extend(result.items.iter().filter_map(|item| match item {
        PageItem::Page {
            page,
            is_current: false,
        } => Some((format!("Page {page}"), Action::Goto(*page))),
        _ => None,
    }));
    entries.push(("Quit".to_string(), Action::Quit));
    entries
}

/// Execute the browse command
pub fn execute(args: &BrowseArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let mut request: PaginationRequest =
        args.display.request(&config.pagination, args.page, args.pages);

    loop {
        let result = compute_window(&request);
        println!("{}", output::render_text(&result));

        if result.is_empty() {
            return Ok(());
        }

        let entries = menu(&result);
        let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();
        let choice = dialoguer::Select::new()
            .with_prompt(format!("Page {}", result.current_page().unwrap_or(1)))
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| AppError::with_source(ErrorKind::Io, "Input error", e))?;

        match entries[choice].1 {
            Action::Goto(page) => {
                tracing::debug!(from = request.current_page, to = page, "Page change");
                request = request.at_page(page);
            }
            Action::Quit => return Ok(()),
        }
    }
}
