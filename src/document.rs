//! Loading nodes from Figma JSON payloads.
//!
//! Accepts a bare node, a file response (`{"document": ...}`), or a nodes
//! response (`{"nodes": {"<id>": {"document": ...}}}`).

use std::path::Path;

use serde_json::Value;

use crate::error::ClassifyError;
use crate::models::Node;

/// Parse a single bare node.
pub fn parse_node(json: &str) -> Result<Node, ClassifyError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse any supported payload into its root nodes.
pub fn parse_roots(json: &str) -> Result<Vec<Node>, ClassifyError> {
    let value: Value = serde_json::from_str(json)?;
    parse_roots_value(value)
}

/// Read a file and parse its root nodes.
pub fn load_roots(path: &Path) -> Result<Vec<Node>, ClassifyError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|source| ClassifyError::Io { path: path.to_path_buf(), source })?;
    parse_roots(&contents)
}

/// Same as [`parse_roots`] for an already-decoded JSON value.
///
/// Roots of a nodes response are returned ordered by id. Entries Figma
/// returns as `null` (ids it could not find) are skipped.
pub fn parse_roots_value(value: Value) -> Result<Vec<Node>, ClassifyError> {
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ClassifyError::UnrecognizedDocument(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    if map.contains_key("type") {
        return Ok(vec![serde_json::from_value(Value::Object(map))?]);
    }

    if let Some(document) = map.remove("document") {
        return Ok(vec![serde_json::from_value(document)?]);
    }

    if let Some(nodes) = map.remove("nodes") {
        return parse_nodes_envelope(nodes);
    }

    Err(ClassifyError::UnrecognizedDocument(
        "expected a node (with \"type\"), a \"document\", or a \"nodes\" map".to_string(),
    ))
}

fn parse_nodes_envelope(nodes: Value) -> Result<Vec<Node>, ClassifyError> {
    let entries = match nodes {
        Value::Object(entries) => entries,
        other => {
            return Err(ClassifyError::UnrecognizedDocument(format!(
                "\"nodes\" must be an object, got {}",
                json_kind(&other)
            )));
        }
    };

    let mut entries: Vec<(String, Value)> = entries.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut roots = Vec::with_capacity(entries.len());
    for (id, entry) in entries {
        match entry {
            Value::Null => {
                tracing::debug!(%id, "skipping missing node in response");
            }
            Value::Object(mut wrapper) => {
                let document = wrapper.remove("document").ok_or_else(|| {
                    ClassifyError::UnrecognizedDocument(format!(
                        "nodes entry '{}' has no \"document\"",
                        id
                    ))
                })?;
                roots.push(serde_json::from_value(document)?);
            }
            other => {
                return Err(ClassifyError::UnrecognizedDocument(format!(
                    "nodes entry '{}' must be an object, got {}",
                    id,
                    json_kind(&other)
                )));
            }
        }
    }
    Ok(roots)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Used by MCP tool inputs, which arrive as decoded JSON.
pub fn node_from_value(value: Value) -> Result<Node, ClassifyError> {
    Ok(serde_json::from_value(value)?)
}
