//! The sequential migration pipeline.
//!
//! Collect → (parse → transform → emit → diff) per file → write reports.
//! Strictly single-threaded and single-pass; a file is either rewritten
//! whole or left exactly as found. Parse and emit failures are per-file:
//! they are logged, the file is skipped, and the run continues.

use std::fs;
use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;

use crate::collector::collect_source_files;
use crate::config::{MigrationConfig, display_slashed};
use crate::diff;
use crate::error::{MigrateError, Result};
use crate::fixer::apply_fixes;
use crate::parser;
use crate::report::{ChangeRecord, RunReport};
use crate::transform::transform;

/// Progress notifications emitted while a run executes.
///
/// The CLI turns these into the console lines the tool prints; tests pass a
/// no-op sink.
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// Collection finished; processing is about to start
    Scanning { count: usize, root: PathBuf },
    /// A file was rewritten on disk
    Updated { file: String },
    /// A file failed to parse and was left untouched
    SkippedParse { file: String },
    /// Regeneration failed for a file; it was left untouched
    SkippedEmit { file: String, reason: String },
}

fn relative_display(file: &Path, root: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    display_slashed(rel)
}

/// Execute a full migration run.
///
/// Returns the run report; the only run-fatal errors are I/O failures
/// (resolving the root, overwriting a source file, writing the reports).
pub fn run(config: &MigrationConfig, on_event: &mut dyn FnMut(RunEvent)) -> Result<RunReport> {
    let root = config.absolute_root()?;
    let files = collect_source_files(&root);
    on_event(RunEvent::Scanning {
        count: files.len(),
        root: root.clone(),
    });

    let mut report = RunReport::new(display_slashed(&root));
    let mut sections: Vec<String> = Vec::new();

    for file in files {
        let rel = relative_display(&file, &root);

        let original = match fs::read_to_string(&file) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("Skipping (read error): {rel}: {err}");
                continue;
            }
        };

        let allocator = Allocator::default();
        let program = match parser::parse(&allocator, &original, &file) {
            Ok(program) => program,
            Err(err) => {
                tracing::warn!("Skipping (parse error): {rel}: {err}");
                on_event(RunEvent::SkippedParse { file: rel });
                continue;
            }
        };

        let outcome = transform(&program, &original, &file, &root);
        let output = match apply_fixes(&original, outcome.fixes) {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!("Skipping (emit error): {rel}: {err}");
                on_event(RunEvent::SkippedEmit {
                    file: rel,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        report.processed_files += 1;

        if output != original {
            fs::write(&file, &output).map_err(|err| MigrateError::io(&file, err))?;
            sections.push(diff::render_file_section(&rel, &original, &output));
            report.record(ChangeRecord {
                file: rel.clone(),
                changes: outcome.changes,
            });
            on_event(RunEvent::Updated { file: rel });
        }
    }

    let json = report
        .to_json()
        .map_err(|err| MigrateError::emit(&config.json_report_path, err.to_string()))?;
    fs::write(&config.json_report_path, json)
        .map_err(|err| MigrateError::io(&config.json_report_path, err))?;

    let html = diff::render_report_page(&report, &sections);
    fs::write(&config.html_report_path, html)
        .map_err(|err| MigrateError::io(&config.html_report_path, err))?;

    Ok(report)
}
