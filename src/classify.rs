//! Chart and illustration detection for Figma nodes.
//!
//! A node is treated as a chart or illustration (something to export as an
//! image rather than rebuild from primitives) when either:
//!
//! 1. the designer attached export presets to it, or
//! 2. it is larger than icon size in both dimensions and holds several
//!    vector children.
//!
//! Everything else, notably small icon frames, is not a chart.

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;
use crate::models::{Node, NodeType};

/// Default side length a node must exceed, in both dimensions, to count as
/// larger than an icon.
pub const DEFAULT_MIN_DIMENSION: f64 = 50.0;

/// Default number of direct `VECTOR` children a large node needs.
pub const DEFAULT_MIN_VECTOR_CHILDREN: usize = 2;

/// Thresholds used by [`Classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Width and height must both be strictly greater than this
    #[serde(default = "default_min_dimension")]
    pub min_dimension: f64,
    /// Minimum count of direct `VECTOR` children
    #[serde(default = "default_min_vector_children")]
    pub min_vector_children: usize,
}

fn default_min_dimension() -> f64 {
    DEFAULT_MIN_DIMENSION
}

fn default_min_vector_children() -> usize {
    DEFAULT_MIN_VECTOR_CHILDREN
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_dimension: DEFAULT_MIN_DIMENSION,
            min_vector_children: DEFAULT_MIN_VECTOR_CHILDREN,
        }
    }
}

/// Why a node was or was not classified as a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// The node has export presets
    ExportSettings { count: usize },
    /// Larger than icon size with enough vector children
    VectorComposition { width: f64, height: f64, vector_children: usize },
    /// No bounding box and no export presets
    NoBoundingBox,
    /// At or below icon size in at least one dimension
    BelowSizeThreshold { width: f64, height: f64, threshold: f64 },
    /// Large enough, but not enough vector children
    TooFewVectors { vector_children: usize, required: usize },
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::ExportSettings { count } => {
                write!(f, "{} export setting{}", count, if *count == 1 { "" } else { "s" })
            }
            Reason::VectorComposition { width, height, vector_children } => {
                write!(f, "{}x{} with {} vector children", width, height, vector_children)
            }
            Reason::NoBoundingBox => write!(f, "no bounding box"),
            Reason::BelowSizeThreshold { width, height, threshold } => {
                write!(f, "{}x{} is not larger than {}px", width, height, threshold)
            }
            Reason::TooFewVectors { vector_children, required } => {
                write!(f, "{} vector children, need {}", vector_children, required)
            }
        }
    }
}

/// Classification outcome for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub is_chart: bool,
    pub reason: Reason,
}

impl Verdict {
    pub fn is_chart(&self) -> bool {
        self.is_chart
    }

    /// One-line description, e.g. `chart (2 export settings)`.
    pub fn summary(&self) -> String {
        let label = if self.is_chart { "chart" } else { "not chart" };
        format!("{} ({})", label, self.reason)
    }
}

/// Applies the chart/illustration rules with a given set of thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a node and report the deciding reason.
    ///
    /// Fails only when the node's own bounding box is invalid; absent
    /// optional fields are treated as empty.
    pub fn classify(&self, node: &Node) -> Result<Verdict, ClassifyError> {
        node.validate()?;

        let (is_chart, reason) = self.decide(node);
        tracing::trace!(id = %node.id, name = %node.name, is_chart, %reason, "classified node");

        Ok(Verdict {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type,
            is_chart,
            reason,
        })
    }

    /// Boolean form of [`Classifier::classify`].
    pub fn is_chart(&self, node: &Node) -> Result<bool, ClassifyError> {
        self.classify(node).map(|v| v.is_chart)
    }

    fn decide(&self, node: &Node) -> (bool, Reason) {
        let exports = node.export_settings().len();
        if exports > 0 {
            return (true, Reason::ExportSettings { count: exports });
        }

        let Some(bbox) = node.absolute_bounding_box else {
            return (false, Reason::NoBoundingBox);
        };

        if !bbox.exceeds(self.config.min_dimension) {
            return (
                false,
                Reason::BelowSizeThreshold {
                    width: bbox.width,
                    height: bbox.height,
                    threshold: self.config.min_dimension,
                },
            );
        }

        let vector_children = node.count_children_of(NodeType::Vector);
        if vector_children >= self.config.min_vector_children {
            (
                true,
                Reason::VectorComposition {
                    width: bbox.width,
                    height: bbox.height,
                    vector_children,
                },
            )
        } else {
            (
                false,
                Reason::TooFewVectors {
                    vector_children,
                    required: self.config.min_vector_children,
                },
            )
        }
    }
}

/// Decide whether `node` is a chart or illustration using default thresholds.
///
/// # Example
///
/// ```
/// use figma_mcp::classify::is_chart_or_illustration;
/// use figma_mcp::models::{Node, NodeType};
///
/// let icon = Node::new("3:230", NodeType::Frame)
///     .with_size(32.0, 32.0)
///     .with_child(Node::new("1", NodeType::Vector));
/// assert!(!is_chart_or_illustration(&icon).unwrap());
/// ```
pub fn is_chart_or_illustration(node: &Node) -> Result<bool, ClassifyError> {
    Classifier::default().is_chart(node)
}
