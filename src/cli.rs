// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `prereq-graph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "prereq-graph",
    version,
    about = "Inspect course prerequisite graphs and their layered layouts.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML). A missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = "PrereqGraph.toml")]
    pub config: String,

    /// Override `[data].ast_dir`.
    #[arg(long, value_name = "DIR", global = true)]
    pub ast_dir: Option<PathBuf>,

    /// Override `[data].catalog`.
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PREREQ_GRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List root courses, optionally for a single department.
    Courses {
        #[arg(long, value_name = "PREFIX")]
        dept: Option<String>,
    },

    /// Print the layered view (JSON) for a course.
    Layers {
        code: String,

        /// Course levels to show; defaults to `[layout].max_depth`.
        #[arg(long)]
        depth: Option<usize>,

        /// Build the tree from the catalog instead of the AST directory.
        #[arg(long)]
        from_catalog: bool,
    },

    /// Print the compiled dependency graph (JSON) for a course.
    Compile {
        code: String,

        /// Print courses in prerequisite-first order instead.
        #[arg(long)]
        order: bool,
    },

    /// Print title and special requirements for a course.
    Info { code: String },
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
