//! MCP (Model Context Protocol) server implementation for figma-mcp
//!
//! Exposes node classification as MCP tools so AI models can decide which
//! parts of a Figma design to export as images instead of rebuilding them.
//!
//! Start the server with `figma-mcp mcp` (feature-gated).

mod server;
pub mod tools;

pub use server::{run_server, FigmaMcpServer};
