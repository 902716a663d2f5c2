//! MCP server command implementation

use std::process::ExitCode;

use super::{resolve_config, ClassifierArgs, EXIT_ERROR, EXIT_SUCCESS};
use crate::config::CliOverrides;

/// Execute the MCP server command
pub fn run_mcp(args: &ClassifierArgs) -> ExitCode {
    use tokio::runtime::Runtime;

    let config = match resolve_config(args, CliOverrides::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: Failed to create async runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match rt.block_on(crate::mcp::run_server(config)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: MCP server failed: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
