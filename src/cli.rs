// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `gridiron`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gridiron",
    version,
    about = "Analyze a matchup by running statistical agents over a task graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Gridiron.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Gridiron.toml")]
    pub config: String,

    /// Path to the game-data JSON document.
    #[arg(long, value_name = "PATH", default_value = "game.json")]
    pub data: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GRIDIRON_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the pipeline, but don't execute any agents.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
