//! Scan command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::classify::Classifier;
use crate::config::CliOverrides;
use crate::document::{load_roots, parse_roots};
use crate::scan::{find_charts, ChartMatch};

use super::{read_stdin, resolve_config, ClassifierArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the scan command
pub fn run_scan(
    file: Option<&Path>,
    stdin: bool,
    max_depth: Option<usize>,
    frames_only: bool,
    json: bool,
    args: &ClassifierArgs,
) -> ExitCode {
    let roots = if stdin {
        match read_stdin() {
            Ok(content) => parse_roots(&content),
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else if let Some(path) = file {
        load_roots(path)
    } else {
        eprintln!("Error: Provide a file or use --stdin");
        return ExitCode::from(EXIT_INVALID_ARGS);
    };

    let roots = match roots {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let overrides =
        CliOverrides { max_depth, frames_only: frames_only.then_some(true), ..Default::default() };
    let config = match resolve_config(args, overrides) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let classifier = Classifier::new(config.classifier);
    let options = config.scan.options();

    let mut matches: Vec<ChartMatch> = Vec::new();
    for root in &roots {
        match find_charts(root, &classifier, &options) {
            Ok(found) => matches.extend(found),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if json {
        let output = serde_json::json!({
            "count": matches.len(),
            "matches": matches,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: Failed to serialize output: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        for m in &matches {
            println!("{} [{}] {}: {}", m.display_path(), m.id, m.node_type, m.verdict.reason);
        }
        let plural = if matches.len() == 1 { "" } else { "s" };
        println!("{} chart{} found", matches.len(), plural);
    }

    ExitCode::from(EXIT_SUCCESS)
}
