//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

#[cfg(feature = "mcp")]
mod agent;
mod classify;
mod scan;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, ConfigError, FigmaConfig};

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Check if a path looks like a Figma node export (.json).
pub fn is_node_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("json"))
}

/// Find all node files in a directory (recursively).
pub fn find_node_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let dir_str = dir.display().to_string();

    if let Ok(paths) = glob(&format!("{}/**/*.json", dir_str)) {
        files.extend(paths.filter_map(Result::ok));
    }

    files.sort();
    files
}

/// Expand directory arguments into the node files they contain.
pub(crate) fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(find_node_files(input));
        } else {
            files.push(input.clone());
        }
    }
    files
}

/// figma-mcp - Detect charts and illustrations in Figma node trees
#[derive(Parser)]
#[command(name = "figma-mcp")]
#[command(about = "figma-mcp - Detect charts and illustrations in Figma node JSON")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that classifies nodes
#[derive(Args, Debug, Default, Clone)]
pub struct ClassifierArgs {
    /// Path to figma-mcp.toml (default: search upward from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Width and height must both exceed this many pixels (default: 50)
    #[arg(long)]
    pub min_dimension: Option<f64>,

    /// Minimum number of direct VECTOR children for a large node (default: 2)
    #[arg(long)]
    pub min_vectors: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify Figma nodes as chart/illustration or not
    Classify {
        /// Node JSON files, or directories to search for *.json
        files: Vec<PathBuf>,

        /// Read a single node document from stdin
        #[arg(long)]
        stdin: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        classifier: ClassifierArgs,
    },

    /// List every chart or illustration inside a Figma document
    Scan {
        /// Node, file response, or nodes response JSON
        file: Option<PathBuf>,

        /// Read the document from stdin
        #[arg(long)]
        stdin: bool,

        /// Deepest level to visit (root is 0)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Only classify frame-like nodes (FRAME, GROUP, SECTION, COMPONENT, INSTANCE)
        #[arg(long)]
        frames_only: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        classifier: ClassifierArgs,
    },

    /// Start the MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Mcp {
        #[command(flatten)]
        classifier: ClassifierArgs,
    },
}

/// Load configuration and apply command-line overrides.
pub(crate) fn resolve_config(
    args: &ClassifierArgs,
    mut overrides: CliOverrides,
) -> Result<FigmaConfig, ConfigError> {
    let mut config = load_config(args.config.as_deref())?;
    overrides.min_dimension = args.min_dimension;
    overrides.min_vector_children = args.min_vectors;
    merge_cli_overrides(&mut config, &overrides)?;
    Ok(config)
}

/// Read all of stdin into a string.
pub(crate) fn read_stdin() -> std::io::Result<String> {
    use std::io::Read;

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Install the stderr log subscriber. `RUST_LOG` controls verbosity.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Classify { files, stdin, json, classifier } => {
            classify::run_classify(&files, stdin, json, &classifier)
        }
        Commands::Scan { file, stdin, max_depth, frames_only, json, classifier } => {
            scan::run_scan(file.as_deref(), stdin, max_depth, frames_only, json, &classifier)
        }
        #[cfg(feature = "mcp")]
        Commands::Mcp { classifier } => agent::run_mcp(&classifier),
    }
}
