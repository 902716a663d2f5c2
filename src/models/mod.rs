//! Data models for Figma nodes (geometry, export presets, node trees)

mod export;
mod geometry;
mod node;

pub use export::{ExportConstraint, ExportSetting};
pub use geometry::BoundingBox;
pub use node::{Node, NodeType};
