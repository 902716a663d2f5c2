//! figma-mcp - Library for inspecting Figma node trees
//!
//! This library provides functionality to:
//! - Parse Figma REST API node JSON into typed nodes
//! - Decide whether a node is a chart or illustration rather than an icon
//! - Locate every chart or illustration inside a document
//! - Serve those checks over the Model Context Protocol

pub mod classify;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
#[cfg(feature = "mcp")]
pub mod mcp;
pub mod models;
pub mod scan;

pub use classify::{is_chart_or_illustration, Classifier, ClassifierConfig, Verdict};
pub use error::ClassifyError;
