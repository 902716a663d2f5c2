//! MCP scan tool — find every chart or illustration in a document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::config::FigmaConfig;
use crate::document::parse_roots_value;
use crate::scan::{find_charts, ChartMatch};

/// Input parameters for the figma_find_charts tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindChartsInput {
    /// A Figma node, a file response ({"document": ...}) or a nodes response ({"nodes": {...}})
    pub document: serde_json::Value,

    /// Deepest level to visit, root is 0 (default from config: unlimited)
    pub max_depth: Option<usize>,

    /// Only classify FRAME, GROUP, SECTION, COMPONENT, COMPONENT_SET and INSTANCE nodes
    pub frames_only: Option<bool>,
}

/// Scan result returned to the client as JSON.
#[derive(Debug, Serialize)]
pub struct FindChartsOutput {
    pub count: usize,
    pub matches: Vec<ChartMatch>,
}

/// Execute the scan tool logic.
pub fn run_find_charts(
    input: FindChartsInput,
    config: &FigmaConfig,
) -> Result<FindChartsOutput, String> {
    let mut options = config.scan.options();
    if input.max_depth.is_some() {
        options.max_depth = input.max_depth;
    }
    if let Some(frames_only) = input.frames_only {
        options.frames_only = frames_only;
    }

    let roots = parse_roots_value(input.document).map_err(|e| e.to_string())?;
    let classifier = Classifier::new(config.classifier);

    let mut matches = Vec::new();
    for root in &roots {
        matches.extend(find_charts(root, &classifier, &options).map_err(|e| e.to_string())?);
    }

    Ok(FindChartsOutput { count: matches.len(), matches })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dashboard() -> serde_json::Value {
        json!({
            "name": "Dashboard",
            "nodes": {
                "1:0": {"document": {
                    "id": "1:0",
                    "name": "Overview",
                    "type": "FRAME",
                    "absoluteBoundingBox": {"width": 1440, "height": 900},
                    "children": [
                        {
                            "id": "1:1",
                            "name": "Revenue",
                            "type": "FRAME",
                            "absoluteBoundingBox": {"width": 400, "height": 240},
                            "children": [
                                {"id": "1:2", "type": "VECTOR"},
                                {"id": "1:3", "type": "VECTOR"}
                            ]
                        },
                        {
                            "id": "1:4",
                            "name": "Logo",
                            "type": "INSTANCE",
                            "absoluteBoundingBox": {"width": 24, "height": 24},
                            "exportSettings": [{"format": "SVG"}]
                        }
                    ]
                }}
            }
        })
    }

    #[test]
    fn test_find_charts_in_nodes_response() {
        let input = FindChartsInput { document: dashboard(), max_depth: None, frames_only: None };
        let output = run_find_charts(input, &FigmaConfig::default()).unwrap();
        assert_eq!(output.count, 2);
        assert_eq!(output.matches[0].id, "1:1");
        assert_eq!(output.matches[1].id, "1:4");
        assert_eq!(output.matches[1].path, vec!["Overview".to_string()]);
    }

    #[test]
    fn test_find_charts_depth_limit() {
        let input = FindChartsInput { document: dashboard(), max_depth: Some(0), frames_only: None };
        let output = run_find_charts(input, &FigmaConfig::default()).unwrap();
        assert_eq!(output.count, 0);
    }

    #[test]
    fn test_find_charts_unrecognized() {
        let input = FindChartsInput { document: json!([1, 2]), max_depth: None, frames_only: None };
        let err = run_find_charts(input, &FigmaConfig::default()).unwrap_err();
        assert!(err.contains("Unrecognized document"));
    }
}
