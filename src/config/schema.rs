//! Configuration schema types for `figma-mcp.toml`
//!
//! Defines the structure and validation rules for classifier configuration.

use serde::{Deserialize, Serialize};

use crate::classify::ClassifierConfig;
use crate::scan::ScanOptions;

/// Tree scan settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Deepest level to visit (root is 0). Unlimited when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Only classify frame-like containers
    #[serde(default)]
    pub frames_only: bool,
}

impl ScanConfig {
    pub fn options(&self) -> ScanOptions {
        ScanOptions { max_depth: self.max_depth, frames_only: self.frames_only }
    }
}

/// Complete figma-mcp.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FigmaConfig {
    /// Chart detection thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Tree scan settings
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "classifier.min_dimension")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "figma-mcp.toml: '{}' {}", self.field, self.message)
    }
}

impl FigmaConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let min_dimension = self.classifier.min_dimension;
        if !min_dimension.is_finite() || min_dimension < 0.0 {
            errors.push(ConfigValidationError {
                field: "classifier.min_dimension".to_string(),
                message: format!("must be a non-negative number, got {}", min_dimension),
            });
        }

        if self.classifier.min_vector_children == 0 {
            errors.push(ConfigValidationError {
                field: "classifier.min_vector_children".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        errors
    }
}
