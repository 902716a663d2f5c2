//! Classify command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rayon::prelude::*;

use crate::classify::{Classifier, Verdict};
use crate::config::CliOverrides;
use crate::document::{load_roots, parse_roots};
use crate::error::ClassifyError;
use crate::models::Node;

use super::{
    expand_inputs, read_stdin, resolve_config, ClassifierArgs, EXIT_ERROR, EXIT_INVALID_ARGS,
    EXIT_SUCCESS,
};

/// Label used for stdin input in output.
const STDIN_LABEL: &str = "<stdin>";

/// Outcome of classifying every root of one input.
struct FileReport {
    label: String,
    result: Result<Vec<Verdict>, ClassifyError>,
}

fn classify_roots(
    roots: Result<Vec<Node>, ClassifyError>,
    classifier: &Classifier,
) -> Result<Vec<Verdict>, ClassifyError> {
    roots?.iter().map(|node| classifier.classify(node)).collect()
}

fn classify_file(path: &Path, classifier: &Classifier) -> FileReport {
    FileReport {
        label: path.display().to_string(),
        result: classify_roots(load_roots(path), classifier),
    }
}

/// Execute the classify command
pub fn run_classify(
    files: &[PathBuf],
    stdin: bool,
    json: bool,
    args: &ClassifierArgs,
) -> ExitCode {
    if files.is_empty() && !stdin {
        eprintln!("Error: Provide one or more files or use --stdin");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let config = match resolve_config(args, CliOverrides::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let classifier = Classifier::new(config.classifier);

    let mut reports = Vec::new();
    if stdin {
        let roots = read_stdin()
            .map_err(|source| ClassifyError::Io { path: PathBuf::from(STDIN_LABEL), source })
            .and_then(|content| parse_roots(&content));
        reports.push(FileReport {
            label: STDIN_LABEL.to_string(),
            result: classify_roots(roots, &classifier),
        });
    }

    let file_list = expand_inputs(files);
    tracing::debug!(files = file_list.len(), "classifying inputs");
    let file_reports: Vec<FileReport> =
        file_list.par_iter().map(|path| classify_file(path, &classifier)).collect();
    reports.extend(file_reports);

    let mut failed = 0usize;
    let mut rows = Vec::new();
    for report in &reports {
        match &report.result {
            Ok(verdicts) => {
                for verdict in verdicts {
                    if json {
                        rows.push(serde_json::json!({
                            "file": report.label,
                            "id": verdict.id,
                            "name": verdict.name,
                            "type": verdict.node_type,
                            "is_chart": verdict.is_chart,
                            "reason": verdict.reason,
                            "summary": verdict.summary(),
                        }));
                    } else {
                        println!(
                            "{}: {} \"{}\" {}",
                            report.label,
                            verdict.id,
                            verdict.name,
                            verdict.summary()
                        );
                    }
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}: {}", report.label, e);
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: Failed to serialize output: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if failed > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
