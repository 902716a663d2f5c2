//! Error types for node parsing and classification

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a node cannot be evaluated.
///
/// These are always distinct from a negative classification: a node that is
/// "not a chart" yields `Ok(false)`, a node that could not be read yields one
/// of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassifyError {
    /// JSON syntax error, missing required key, or a field of the wrong type
    #[error("Malformed node JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A bounding box dimension that is negative or not finite
    #[error("Node '{node_id}' has invalid {field}: {value}")]
    InvalidDimension { node_id: String, field: &'static str, value: f64 },
    /// JSON that is neither a node nor a known Figma response envelope
    #[error("Unrecognized document: {0}")]
    UnrecognizedDocument(String),
    /// Input file could not be read
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClassifyError {
    /// Short machine-readable category, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifyError::Json(_) => "malformed_json",
            ClassifyError::InvalidDimension { .. } => "invalid_dimension",
            ClassifyError::UnrecognizedDocument(_) => "unrecognized_document",
            ClassifyError::Io { .. } => "io_error",
        }
    }
}
