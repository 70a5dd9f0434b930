//! Command execution: run the pipeline and print the console summary.

use miette::Result;
use nextshift::{RunEvent, pipeline};

use crate::cli::Cli;

/// Run the migration described by the parsed arguments.
///
/// Prints the same console lines the original script did: a scanning
/// header, one `Updated:` line per rewritten file, and the final totals.
/// Per-file parse failures are warnings; the process exits zero whenever
/// the main loop completes.
pub fn migrate_execute(args: &Cli) -> Result<()> {
    let config = args.to_config();

    let report = pipeline::run(&config, &mut |event| match event {
        RunEvent::Scanning { count, root } => {
            println!("Scanning {count} files under {}...\n", root.display());
        }
        RunEvent::Updated { file } => println!("Updated: {file}"),
        RunEvent::SkippedParse { file } => {
            tracing::warn!("Skipping (parse error): {file}");
        }
        RunEvent::SkippedEmit { file, reason } => {
            tracing::warn!("Skipping (emit error): {file}: {reason}");
        }
    })
    .map_err(miette::Report::new)?;

    println!();
    println!("Done.");
    println!("Processed: {} files", report.processed_files);
    println!("Modified:  {} files", report.modified_files);
    println!("JSON report:  {}", config.json_report_path.display());
    println!("HTML report:  {}", config.html_report_path.display());
    println!("Now run: npm run build");

    Ok(())
}
