//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use pagewin_core::error::{AppError, ErrorKind};

use crate::output::{self, OutputFormat};

/// Commented default configuration shipped with the binary
const DEFAULT_CONFIG: &str = include_str!("../../../../config/default.toml");

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            match format {
                OutputFormat::Json => output::print_json(&config)?,
                OutputFormat::Text | OutputFormat::Table => {
                    let p = &config.pagination;
                    output::print_kv("pagination.max_visible", &p.max_visible.to_string());
                    output::print_kv("pagination.edge_count", &p.edge_count.to_string());
                    output::print_kv(
                        "pagination.trailing_edge_only",
                        &p.trailing_edge_only.to_string(),
                    );
                    output::print_kv("pagination.page_size", &p.page_size.to_string());
                    output::print_kv("logging.level", &config.logging.level);
                    output::print_kv("logging.format", &format!("{:?}", config.logging.format));
                }
            }
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                println!(
                    "  Window: {} slots, {} edge page(s){}",
                    config.pagination.max_visible,
                    config.pagination.edge_count,
                    if config.pagination.trailing_edge_only {
                        " (trailing only)"
                    } else {
                        ""
                    }
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            generate(out_path)?;
            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}

/// Write the commented default configuration to `out_path`
fn generate(out_path: &str) -> Result<(), AppError> {
    if let Some(parent) = std::path::Path::new(out_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to create dir '{}'", parent.display()),
                e,
            )
        })?;
    }

    std::fs::write(out_path, DEFAULT_CONFIG).map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to write config '{}'", out_path),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_loadable_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/pagewin.toml");
        let path_str = path.to_str().expect("utf-8 path").to_string();

        let args = ConfigArgs {
            command: ConfigCommand::Generate {
                output: path_str.clone(),
            },
        };
        execute(&args, "unused.toml", OutputFormat::Text).expect("generate succeeds");

        let written = std::fs::read_to_string(&path).expect("file written");
        assert_eq!(written, DEFAULT_CONFIG);
    }

    #[test]
    fn test_generate_failure_keeps_io_cause() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("write blocker");
        let path = blocker.join("pagewin.toml");

        let err = generate(path.to_str().expect("utf-8 path")).expect_err("parent is a file");

        assert_eq!(err.kind, ErrorKind::Io);
        let cause = err.source.as_ref().expect("io cause kept");
        assert!(cause.downcast_ref::<std::io::Error>().is_some());
    }
}
