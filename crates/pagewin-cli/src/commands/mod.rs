//! CLI command definitions and dispatch.

pub mod browse;
pub mod config;
pub mod window;

use clap::{Args, Parser, Subcommand};

use pagewin_core::config::AppConfig;
use pagewin_core::config::pagination::PaginationConfig;
use pagewin_core::error::AppError;
use pagewin_core::PaginationRequest;

use crate::output::OutputFormat;

/// pagewin: compute and browse pagination windows
#[derive(Debug, Parser)]
#[command(name = "pagewin", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the controls for one page
    Window(window::WindowArgs),
    /// Step through pages interactively
    Browse(browse::BrowseArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Window(args) => window::execute(args, &self.config, self.format),
            Commands::Browse(args) => browse::execute(args, &self.config),
            Commands::Config(args) => config::execute(args, &self.config, self.format),
        }
    }
}

/// Display constraints shared by `window` and `browse`.
///
/// Anything left unset falls back to the `[pagination]` configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct DisplayArgs {
    /// Slot budget for page numbers, edge pages, and ellipses
    #[arg(short = 'm', long)]
    pub max_visible: Option<u64>,

    /// Pages pinned at each extremity (0-3)
    #[arg(short, long, conflicts_with = "show_last_page")]
    pub edges: Option<u64>,

    /// Always show the last page behind an ellipsis, without pinning the first
    #[arg(long)]
    pub show_last_page: bool,
}

impl DisplayArgs {
    /// Build a request, letting flags override the configured defaults.
    pub fn request(
        &self,
        defaults: &PaginationConfig,
        current_page: u64,
        total_pages: u64,
    ) -> PaginationRequest {
        let mut config = defaults.clone();
        if let Some(max_visible) = self.max_visible {
            config.max_visible = max_visible;
        }
        if let Some(edges) = self.edges {
            config.edge_count = edges;
            config.trailing_edge_only = false;
        }

        let request = config.request(current_page, total_pages);
        if self.show_last_page {
            request.show_last_page(true)
        } else {
            request
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
