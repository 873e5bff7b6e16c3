//! Stepdeck CLI
//!
//! Main entry point for the stepdeck command-line tool: a browsable catalog
//! of troubleshooting steps, each bundling a checklist and copyable prompt
//! templates with per-tone variants and variable interpolation.

mod commands;
mod store;

use clap::{Parser, Subcommand};
use commands::{
    CheckCommand, ListCommand, RenderCommand, SearchCommand, ShowCommand, VarsCommand,
};
use stepdeck_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Stepdeck CLI - browsable troubleshooting steps with copyable prompts
#[derive(Parser, Debug)]
#[command(name = "stepdeck")]
#[command(about = "Browsable troubleshooting steps with copyable prompts", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "STEPDECK_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "STEPDECK_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog steps
    List(ListCommand),

    /// Show one step: checklist and prompts
    Show(ShowCommand),

    /// Search steps and prompts
    Search(SearchCommand),

    /// Render a prompt template to stdout
    Render(RenderCommand),

    /// Manage the global variable scope
    Vars(VarsCommand),

    /// Toggle a checklist item
    Check(CheckCommand),
}

fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.workspace,
        cli.config,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Workspace: {:?}", config.workspace);

    let command_name = match &cli.command {
        Commands::List(_) => "list",
        Commands::Show(_) => "show",
        Commands::Search(_) => "search",
        Commands::Render(_) => "render",
        Commands::Vars(_) => "vars",
        Commands::Check(_) => "check",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::List(cmd) => cmd.execute(&config),
        Commands::Show(cmd) => cmd.execute(&config),
        Commands::Search(cmd) => cmd.execute(&config),
        Commands::Render(cmd) => cmd.execute(&config),
        Commands::Vars(cmd) => cmd.execute(&config),
        Commands::Check(cmd) => cmd.execute(&config),
    };

    if let Err(e) = &result {
        tracing::error!("Command failed: {}", e);
    }

    result
}
