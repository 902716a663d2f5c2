//! MCP classify tool — decide whether one node is a chart or illustration.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::classify::{Classifier, ClassifierConfig, Verdict};
use crate::document::node_from_value;

/// Input parameters for the figma_classify_node tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClassifyNodeInput {
    /// Figma node JSON as returned by the REST API (id, type, absoluteBoundingBox, exportSettings, children)
    pub node: serde_json::Value,

    /// Override: width and height must both exceed this many pixels (default from config, 50)
    pub min_dimension: Option<f64>,

    /// Override: minimum number of direct VECTOR children (default from config, 2)
    pub min_vector_children: Option<usize>,
}

/// Execute the classify tool logic.
pub fn run_classify(input: ClassifyNodeInput, base: &ClassifierConfig) -> Result<Verdict, String> {
    let mut config = *base;
    if let Some(min_dimension) = input.min_dimension {
        if !min_dimension.is_finite() || min_dimension < 0.0 {
            return Err(format!("min_dimension must be a non-negative number, got {}", min_dimension));
        }
        config.min_dimension = min_dimension;
    }
    if let Some(min_vector_children) = input.min_vector_children {
        if min_vector_children == 0 {
            return Err("min_vector_children must be at least 1".into());
        }
        config.min_vector_children = min_vector_children;
    }

    let node = node_from_value(input.node).map_err(|e| e.to_string())?;
    Classifier::new(config).classify(&node).map_err(|e| e.to_string())
}
