//! MCP tool definitions for figma-mcp
//!
//! Each tool wraps a library function, exposing it as a structured MCP tool
//! that AI models can call.

pub mod classify;
pub mod scan;
