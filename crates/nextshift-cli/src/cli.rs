//! Command-line interface definition.
//!
//! A single flat command: point the tool at a source tree, run the
//! migration, write the two reports. Paths default to the locations the
//! original one-shot script hard-coded.

use std::path::PathBuf;

use clap::Parser;
use nextshift::config::{
    DEFAULT_HTML_REPORT, DEFAULT_JSON_REPORT, DEFAULT_SOURCE_ROOT, MigrationConfig,
};

/// nextshift - migrate Next.js imports and JSX to React Router
#[derive(Parser, Debug)]
#[command(
    name = "nextshift",
    version,
    about = "Migrate Next.js imports and JSX to React Router equivalents",
    long_about = "Nextshift rewrites next/dynamic, next/link, next/image, next/navigation\n\
                  and next/head imports (plus @/ alias imports and the matching JSX) into\n\
                  React Router / plain-React equivalents, overwriting files in place and\n\
                  writing a JSON summary and an HTML diff report."
)]
pub struct Cli {
    /// Root of the source tree to migrate
    #[arg(long, default_value = DEFAULT_SOURCE_ROOT)]
    pub root: PathBuf,

    /// Output path for the JSON run report
    #[arg(long, default_value = DEFAULT_JSON_REPORT)]
    pub json_report: PathBuf,

    /// Output path for the HTML diff report
    #[arg(long, default_value = DEFAULT_HTML_REPORT)]
    pub html_report: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The pipeline configuration these arguments describe.
    pub fn to_config(&self) -> MigrationConfig {
        MigrationConfig {
            source_root: self.root.clone(),
            json_report_path: self.json_report.clone(),
            html_report_path: self.html_report.clone(),
        }
    }
}
