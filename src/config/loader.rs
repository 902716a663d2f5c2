//! Configuration loading and discovery for `figma-mcp.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::FigmaConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file searched for.
pub const CONFIG_FILE_NAME: &str = "figma-mcp.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse figma-mcp.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the minimum chart dimension
    pub min_dimension: Option<f64>,
    /// Override the minimum number of vector children
    pub min_vector_children: Option<usize>,
    /// Override the scan depth limit
    pub max_depth: Option<usize>,
    /// Only classify frame-like nodes during scans
    pub frames_only: Option<bool>,
}

/// Find figma-mcp.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for figma-mcp.toml
/// 2. Check XDG_CONFIG_HOME/figma-mcp/figma-mcp.toml (or ~/.config/figma-mcp/figma-mcp.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find figma-mcp.toml in XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("figma-mcp").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find figma-mcp.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a figma-mcp.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
///
/// # Example
/// ```ignore
/// // Load from discovered config
/// let config = load_config(None)?;
///
/// // Load from specific path
/// let config = load_config(Some(Path::new("design/figma-mcp.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<FigmaConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            load_config_file(&p)
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(FigmaConfig::default())
        }
    }
}

fn load_config_file(path: &Path) -> Result<FigmaConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: FigmaConfig = toml::from_str(&contents)?;
    check(&config)?;
    Ok(config)
}

fn check(config: &FigmaConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. The merged result
/// is validated again, since overrides bypass the file checks.
pub fn merge_cli_overrides(
    config: &mut FigmaConfig,
    overrides: &CliOverrides,
) -> Result<(), ConfigError> {
    if let Some(min_dimension) = overrides.min_dimension {
        config.classifier.min_dimension = min_dimension;
    }

    if let Some(min_vector_children) = overrides.min_vector_children {
        config.classifier.min_vector_children = min_vector_children;
    }

    if let Some(max_depth) = overrides.max_depth {
        config.scan.max_depth = Some(max_depth);
    }

    if let Some(frames_only) = overrides.frames_only {
        config.scan.frames_only = frames_only;
    }

    check(config)
}
