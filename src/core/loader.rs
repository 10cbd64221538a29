//! Report file lookup utilities

use std::fs;
use std::path::{Path, PathBuf};

/// Find a report file by ID (supports partial matching)
///
/// Searches for a .frt.yaml file whose name contains the given ID.
/// Returns the first match found.
pub fn find_report_file(dir: &Path, id: &str) -> Option<PathBuf> {
    if !dir.exists() {
        return None;
    }

    for entry in fs::read_dir(dir).ok()? {
        let entry = entry.ok()?;
        let path = entry.path();

        if path.to_string_lossy().ends_with(".frt.yaml") {
            let filename = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            if filename.contains(id) || filename.starts_with(id) {
                return Some(path);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_find_report_file_nonexistent_dir() {
        let result = find_report_file(Path::new("/nonexistent/path"), "XFMR-123");
        assert!(result.is_none());
    }

    #[test]
    fn test_find_report_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("XFMR-01J123456789ABCDEF.frt.yaml");
        fs::write(&file_path, "id: XFMR-01J123456789ABCDEF").unwrap();

        let result = find_report_file(dir.path(), "XFMR-01J123456789ABCDEF");
        assert!(result.is_some());
        assert_eq!(result.unwrap(), file_path);
    }

    #[test]
    fn test_find_report_file_partial_id() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("PNL-01J123456789ABCDEF.frt.yaml");
        fs::write(&file_path, "id: PNL-01J123456789ABCDEF").unwrap();

        let result = find_report_file(dir.path(), "PNL-01J12");
        assert_eq!(result, Some(file_path));
    }

    #[test]
    fn test_find_report_file_ignores_other_extensions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "XFMR-123").unwrap();

        assert!(find_report_file(dir.path(), "XFMR-123").is_none());
    }
}
