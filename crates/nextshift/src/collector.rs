//! Candidate file collection.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions that mark a file as a source module to inspect.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Recursively collect source files under `root`, in a deterministic
/// (name-sorted) order.
///
/// A non-existent root yields an empty list rather than an error. Symlinks
/// are not followed, so cyclic directory structures cannot recurse forever;
/// unreadable entries are skipped with a warning.
pub fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_source_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_only_source_extensions_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("components/chambers")).unwrap();
        fs::write(root.join("App.tsx"), "export default {};").unwrap();
        fs::write(root.join("util.ts"), "export {};").unwrap();
        fs::write(root.join("components/chambers/WarRoom.tsx"), "export {};").unwrap();
        fs::write(root.join("styles.css"), "body {}").unwrap();
        fs::write(root.join("data.json"), "{}").unwrap();

        let files = collect_source_files(root);
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| is_source_file(f)));
    }

    #[test]
    fn missing_root_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(collect_source_files(&missing).is_empty());
    }

    #[test]
    fn order_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.ts"), "").unwrap();
        fs::write(root.join("a.ts"), "").unwrap();
        fs::write(root.join("c.ts"), "").unwrap();

        let first = collect_source_files(root);
        let second = collect_source_files(root);
        assert_eq!(first, second);
        assert!(first[0].ends_with("a.ts"));
    }
}
