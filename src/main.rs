//! figma-mcp - Command-line tool and MCP server for Figma chart detection

use std::process::ExitCode;

use figma_mcp::cli;

fn main() -> ExitCode {
    cli::run()
}
