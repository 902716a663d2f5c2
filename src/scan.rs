//! Finding charts and illustrations inside a node tree.

use serde::Serialize;

use crate::classify::{Classifier, Verdict};
use crate::error::ClassifyError;
use crate::models::{Node, NodeType};

/// Controls how much of the tree [`find_charts`] visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Deepest level visited; the root is depth 0. `None` visits everything.
    pub max_depth: Option<usize>,
    /// Only classify frame-like containers (children are still traversed)
    pub frames_only: bool,
}

/// A node found to be a chart or illustration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMatch {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Distance from the scan root
    pub depth: usize,
    /// Names of the ancestors, root first
    pub path: Vec<String>,
    pub verdict: Verdict,
}

impl ChartMatch {
    /// Ancestor names and the node's own name joined with ` / `.
    pub fn display_path(&self) -> String {
        let mut parts: Vec<&str> = self.path.iter().map(String::as_str).collect();
        parts.push(&self.name);
        parts.join(" / ")
    }
}

/// Walk `root` depth-first and collect every chart.
///
/// Once a node is a chart its subtree is skipped, since its shapes belong to
/// that chart. The first node with invalid geometry aborts the scan.
pub fn find_charts(
    root: &Node,
    classifier: &Classifier,
    options: &ScanOptions,
) -> Result<Vec<ChartMatch>, ClassifyError> {
    let mut matches = Vec::new();
    let mut path = Vec::new();
    visit(root, 0, &mut path, classifier, options, &mut matches)?;
    tracing::debug!(root = %root.id, found = matches.len(), "scan complete");
    Ok(matches)
}

fn visit(
    node: &Node,
    depth: usize,
    path: &mut Vec<String>,
    classifier: &Classifier,
    options: &ScanOptions,
    matches: &mut Vec<ChartMatch>,
) -> Result<(), ClassifyError> {
    if options.max_depth.is_some_and(|max| depth > max) {
        return Ok(());
    }

    if !options.frames_only || node.is_frame_like() {
        let verdict = classifier.classify(node)?;
        if verdict.is_chart() {
            matches.push(ChartMatch {
                id: node.id.clone(),
                name: node.name.clone(),
                node_type: node.node_type,
                depth,
                path: path.clone(),
                verdict,
            });
            return Ok(());
        }
    }

    path.push(node.name.clone());
    for child in node.children() {
        visit(child, depth + 1, path, classifier, options, matches)?;
    }
    path.pop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExportSetting;

    fn chart(id: &str, name: &str) -> Node {
        Node::new(id, NodeType::Frame)
            .with_name(name)
            .with_size(200.0, 150.0)
            .with_child(Node::new(format!("{}-a", id), NodeType::Vector))
            .with_child(Node::new(format!("{}-b", id), NodeType::Vector))
    }

    fn icon(id: &str) -> Node {
        Node::new(id, NodeType::Frame)
            .with_name("icon")
            .with_size(24.0, 24.0)
            .with_child(Node::new(format!("{}-v", id), NodeType::Vector))
    }

    fn page() -> Node {
        let section = Node::new("2:0", NodeType::Section)
            .with_name("Metrics")
            .with_child(chart("2:1", "Revenue"))
            .with_child(icon("2:2"));
        Node::new("0:1", NodeType::Canvas)
            .with_name("Page 1")
            .with_child(section)
            .with_child(
                Node::new("3:0", NodeType::Rectangle)
                    .with_name("Hero")
                    .with_export(ExportSetting::format("PNG")),
            )
    }

    #[test]
    fn test_finds_nested_charts() {
        let matches = find_charts(&page(), &Classifier::default(), &ScanOptions::default()).unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2:1", "3:0"]);
        assert_eq!(matches[0].depth, 2);
        assert_eq!(matches[0].path, vec!["Page 1".to_string(), "Metrics".to_string()]);
        assert_eq!(matches[0].display_path(), "Page 1 / Metrics / Revenue");
    }

    #[test]
    fn test_does_not_descend_into_charts() {
        let outer = chart("1", "Dashboard").with_child(chart("1:inner", "Sparkline"));
        let matches = find_charts(&outer, &Classifier::default(), &ScanOptions::default()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[0].depth, 0);
        assert!(matches[0].path.is_empty());
    }

    #[test]
    fn test_max_depth() {
        let options = ScanOptions { max_depth: Some(1), ..Default::default() };
        let matches = find_charts(&page(), &Classifier::default(), &options).unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["3:0"]);
    }

    #[test]
    fn test_frames_only_skips_exported_rectangle() {
        let options = ScanOptions { frames_only: true, ..Default::default() };
        let matches = find_charts(&page(), &Classifier::default(), &options).unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2:1"]);
    }

    #[test]
    fn test_invalid_geometry_aborts() {
        let root = Node::new("0", NodeType::Canvas)
            .with_child(Node::new("bad", NodeType::Frame).with_size(-1.0, 10.0));
        let err = find_charts(&root, &Classifier::default(), &ScanOptions::default()).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidDimension { .. }));
    }

    #[test]
    fn test_empty_tree() {
        let root = Node::new("0", NodeType::Document);
        let matches = find_charts(&root, &Classifier::default(), &ScanOptions::default()).unwrap();
        assert!(matches.is_empty());
    }
}
