//! Core engine for the `nextshift` migration codemod.
//!
//! `nextshift` rewrites Next.js-specific imports and JSX in a TypeScript/JSX
//! source tree into React Router / plain-React equivalents, overwrites the
//! modified files in place, and records the run in two report artifacts
//! (a JSON summary and an HTML diff page).
//!
//! The pipeline is strictly sequential and single-pass: collect candidate
//! files, then for each file parse → transform → emit → diff before moving
//! to the next. Files that fail to parse are skipped and left untouched;
//! there is no retry, rollback, or state between runs.
//!
//! # Example
//!
//! ```rust,no_run
//! use nextshift::{pipeline, MigrationConfig, RunEvent};
//!
//! let config = MigrationConfig::default();
//! let report = pipeline::run(&config, &mut |event| {
//!     if let RunEvent::Updated { file } = event {
//!         println!("Updated: {file}");
//!     }
//! }).unwrap();
//! println!("{} of {} files modified", report.modified_files, report.processed_files);
//! ```

pub mod collector;
pub mod config;
pub mod diff;
pub mod error;
pub mod fixer;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod transform;

pub use config::MigrationConfig;
pub use error::{MigrateError, Result};
pub use pipeline::RunEvent;
pub use report::{ChangeRecord, RunReport};
