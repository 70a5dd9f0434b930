//! The run report.
//!
//! One `RunReport` is created at program start and appended to by the main
//! sequential loop; at the end of the run it is serialized to JSON (field
//! names match the original report format: `processedFiles`,
//! `modifiedFiles`) and rendered into the HTML diff page.

use serde::{Deserialize, Serialize};

/// What changed in one modified file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Path relative to the run root, forward slashes
    pub file: String,
    /// Messages in the order rules fired during the tree walk
    pub changes: Vec<String>,
}

/// Summary of a whole run.
///
/// Invariant: `entries.len() == modified_files <= processed_files`.
/// Files that fail to parse count toward neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Absolute path of the migrated source root
    pub root: String,
    pub processed_files: usize,
    pub modified_files: usize,
    pub entries: Vec<ChangeRecord>,
}

impl RunReport {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            processed_files: 0,
            modified_files: 0,
            entries: Vec::new(),
        }
    }

    /// Record a modified file, keeping the totals invariant.
    pub fn record(&mut self, entry: ChangeRecord) {
        self.modified_files += 1;
        self.entries.push(entry);
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_the_original_field_names() {
        let mut report = RunReport::new("/tmp/src");
        report.processed_files = 2;
        report.record(ChangeRecord {
            file: "App.tsx".to_string(),
            changes: vec!["Removed next/image import".to_string()],
        });

        let json = report.to_json().unwrap();
        assert!(json.contains("\"processedFiles\": 2"));
        assert!(json.contains("\"modifiedFiles\": 1"));
        assert!(json.contains("\"entries\""));
        assert!(json.contains("\"App.tsx\""));
    }

    #[test]
    fn record_keeps_counts_and_entries_in_sync() {
        let mut report = RunReport::new("/tmp/src");
        for i in 0..3 {
            report.processed_files += 1;
            report.record(ChangeRecord {
                file: format!("f{i}.ts"),
                changes: Vec::new(),
            });
        }
        assert_eq!(report.modified_files, report.entries.len());
        assert!(report.modified_files <= report.processed_files);
    }

    #[test]
    fn round_trips_through_serde() {
        let mut report = RunReport::new("/tmp/src");
        report.processed_files = 1;
        report.record(ChangeRecord {
            file: "a.tsx".to_string(),
            changes: vec!["Converted <Image> to <img>".to_string()],
        });

        let json = report.to_json().unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.processed_files, 1);
        assert_eq!(back.entries[0].file, "a.tsx");
    }
}
