//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use kube_fzf_util::utils::LogLevel;
use std::path::PathBuf;

/// Formatting helpers for kubectl fzf completion caches
#[derive(Parser, Debug)]
#[command(name = "kube-fzf-util")]
#[command(version)]
#[command(about = "Format Kubernetes objects and values for kubectl fzf completion")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error); overrides --verbose
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Join values, truncated to the configured maximum
    Join(JoinArgs),

    /// Join integers
    Ints(IntsArgs),

    /// Join values after removing excluded ones
    Exclude(ExcludeArgs),

    /// Print the age of an RFC 3339 timestamp
    Age(AgeArgs),

    /// Print the cluster name of an API server URL
    Cluster(ClusterArgs),

    /// Render Kubernetes objects (JSON) as cache lines
    Line(LineArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for join command
#[derive(Parser, Debug)]
pub struct JoinArgs {
    /// Values to join
    pub items: Vec<String>,

    /// Maximum number of values displayed
    #[arg(short, long, conflicts_with = "no_limit")]
    pub max: Option<usize>,

    /// Display every value
    #[arg(long)]
    pub no_limit: bool,

    /// Separator between values
    #[arg(short, long)]
    pub sep: Option<String>,
}

/// Arguments for ints command
#[derive(Parser, Debug)]
pub struct IntsArgs {
    /// Integers to join
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Separator between values
    #[arg(short, long)]
    pub sep: Option<String>,
}

/// Arguments for exclude command
#[derive(Parser, Debug)]
pub struct ExcludeArgs {
    /// Values to filter
    pub items: Vec<String>,

    /// Value to exclude (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub excluded: Vec<String>,

    /// Separator between values
    #[arg(short, long)]
    pub sep: Option<String>,
}

/// Arguments for age command
#[derive(Parser, Debug)]
pub struct AgeArgs {
    /// Creation timestamp, e.g. 2024-03-15T10:30:00Z
    pub timestamp: String,
}

/// Arguments for cluster command
#[derive(Parser, Debug)]
pub struct ClusterArgs {
    /// API server URL, e.g. https://kubernetes.prod.example.com:6443
    pub url: String,
}

/// Arguments for line command
#[derive(Parser, Debug)]
pub struct LineArgs {
    /// JSON file to read (stdin if omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective display settings
    Show,

    /// Show environment variables
    Env,

    /// Write a default configuration file
    Init {
        /// Output path (.yaml, .yml or .json)
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
