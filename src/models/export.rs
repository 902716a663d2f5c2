//! Export presets attached to nodes.

use serde::{Deserialize, Serialize};

/// One entry of a node's `exportSettings`.
///
/// Only the presence of entries matters for classification; the fields are
/// carried so the node can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportSetting {
    /// Image format (`PNG`, `JPG`, `SVG`, `PDF`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// File name suffix appended on export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Scaling constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<ExportConstraint>,
}

impl ExportSetting {
    /// Shorthand for a preset with only a format.
    pub fn format(format: impl Into<String>) -> Self {
        Self { format: Some(format.into()), ..Default::default() }
    }
}

/// Export scaling constraint, e.g. `{"type": "SCALE", "value": 2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConstraint {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}
