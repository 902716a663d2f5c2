//! Figma node tree types.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, ExportSetting};
use crate::error::ClassifyError;

/// Kind of a Figma node, as reported in its `type` field.
///
/// Unknown kinds deserialize to [`NodeType::Other`] so newer Figma payloads
/// still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    Rectangle,
    Text,
    Slice,
    #[serde(other)]
    Other,
}

impl NodeType {
    /// The Figma tag for this kind (e.g. `"FRAME"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Document => "DOCUMENT",
            NodeType::Canvas => "CANVAS",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Section => "SECTION",
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Instance => "INSTANCE",
            NodeType::Vector => "VECTOR",
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Star => "STAR",
            NodeType::Line => "LINE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::RegularPolygon => "REGULAR_POLYGON",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Text => "TEXT",
            NodeType::Slice => "SLICE",
            NodeType::Other => "OTHER",
        }
    }

    /// Container kinds a designer would group a chart in.
    pub fn is_frame_like(&self) -> bool {
        matches!(
            self,
            NodeType::Frame
                | NodeType::Group
                | NodeType::Section
                | NodeType::Component
                | NodeType::ComponentSet
                | NodeType::Instance
        )
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node of a Figma document.
///
/// Optional payload fields are modelled as `Option` so that an absent key and
/// an explicit `null` both mean "not set". Use the accessor methods to treat
/// absent sequences as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Opaque Figma node id (e.g. `"6:34"`)
    pub id: String,
    /// Layer name shown in the Figma layers panel
    #[serde(default)]
    pub name: String,
    /// Node kind
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Absolute position and size on the canvas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<BoundingBox>,
    /// Export presets configured on the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_settings: Option<Vec<ExportSetting>>,
    /// Direct children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a node with only the required fields set.
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            node_type,
            absolute_bounding_box: None,
            export_settings: None,
            children: None,
        }
    }

    /// Set the layer name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the bounding box size, positioned at the origin
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.absolute_bounding_box = Some(BoundingBox::new(width, height));
        self
    }

    /// Add an export preset
    pub fn with_export(mut self, setting: ExportSetting) -> Self {
        self.export_settings.get_or_insert_with(Vec::new).push(setting);
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Direct children, empty when the field is absent.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Export presets, empty when the field is absent.
    pub fn export_settings(&self) -> &[ExportSetting] {
        self.export_settings.as_deref().unwrap_or(&[])
    }

    pub fn has_export_settings(&self) -> bool {
        !self.export_settings().is_empty()
    }

    /// Number of direct children of the given kind.
    pub fn count_children_of(&self, node_type: NodeType) -> usize {
        self.children().iter().filter(|c| c.node_type == node_type).count()
    }

    pub fn is_frame_like(&self) -> bool {
        self.node_type.is_frame_like()
    }

    /// Check the node's own geometry.
    ///
    /// Children are not visited; they are validated when they are themselves
    /// classified.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        if let Some(bbox) = &self.absolute_bounding_box {
            bbox.validate(&self.id)?;
        }
        Ok(())
    }
}
