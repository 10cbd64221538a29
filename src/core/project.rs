//! Project discovery and structure

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::identity::{ReportId, ReportKind};

/// Represents an FRT project
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (parent of .frt/)
    root: PathBuf,
}

impl Project {
    /// Find project root by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current =
            std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find project root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        loop {
            let frt_dir = current.join(".frt");
            if frt_dir.is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ProjectError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new project structure at the given path
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let frt_dir = root.join(".frt");
        if frt_dir.exists() {
            return Err(ProjectError::AlreadyExists(root.clone()));
        }

        std::fs::create_dir_all(&frt_dir)
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        // Create default config
        let config_path = frt_dir.join("config.yaml");
        std::fs::write(&config_path, Self::default_config())
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        Self::create_report_dirs(&root)?;

        Ok(Self { root })
    }

    fn default_config() -> &'static str {
        r#"# FRT Project Configuration

# Default author for new reports (can be overridden by global config)
# author: ""

# Editor to use for `frt ... edit` commands (default: $EDITOR)
# editor: ""

# Default output format (auto, yaml, json, csv, tsv, md, id)
# default_format: auto
"#
    }

    fn create_report_dirs(root: &Path) -> Result<(), ProjectError> {
        for kind in ReportKind::all() {
            std::fs::create_dir_all(root.join(Self::report_directory(*kind)))
                .map_err(|e| ProjectError::IoError(e.to_string()))?;
        }
        Ok(())
    }

    /// Get the project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the .frt configuration directory
    pub fn frt_dir(&self) -> PathBuf {
        self.root.join(".frt")
    }

    /// Get the path for a report file
    pub fn report_path(&self, id: &ReportId) -> PathBuf {
        self.root
            .join(Self::report_directory(id.kind()))
            .join(format!("{}.frt.yaml", id))
    }

    /// Get the directory for a given report kind
    pub fn report_directory(kind: ReportKind) -> &'static str {
        match kind {
            ReportKind::Xfmr => "reports/transformers",
            ReportKind::Swgr => "reports/switchgear",
            ReportKind::Pnl => "reports/panelboards",
            ReportKind::Mtrs => "reports/motor-starters",
        }
    }

    /// Iterate all report files of a given kind
    pub fn iter_report_files(&self, kind: ReportKind) -> impl Iterator<Item = PathBuf> {
        let dir = self.root.join(Self::report_directory(kind));
        walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().to_string_lossy().ends_with(".frt.yaml"))
            .map(|e| e.path().to_path_buf())
    }

    /// Iterate all report files of every kind
    pub fn iter_all_report_files(&self) -> impl Iterator<Item = (ReportKind, PathBuf)> + '_ {
        ReportKind::all()
            .iter()
            .flat_map(|kind| self.iter_report_files(*kind).map(|p| (*kind, p)))
    }
}

/// Errors that can occur during project operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not an FRT project (searched from {searched_from:?}). Run 'frt init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("FRT project already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_project_init_creates_structure() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();

        assert!(project.frt_dir().exists());
        assert!(project.frt_dir().join("config.yaml").exists());
        assert!(project.root().join("reports/transformers").is_dir());
        assert!(project.root().join("reports/switchgear").is_dir());
        assert!(project.root().join("reports/panelboards").is_dir());
        assert!(project.root().join("reports/motor-starters").is_dir());
    }

    #[test]
    fn test_project_init_fails_if_exists() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();

        let err = Project::init(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::AlreadyExists(_)));
    }

    #[test]
    fn test_project_discover_finds_frt_dir() {
        let tmp = tempdir().unwrap();
        Project::init(tmp.path()).unwrap();

        let subdir = tmp.path().join("some/nested/dir");
        std::fs::create_dir_all(&subdir).unwrap();

        let project = Project::discover_from(&subdir).unwrap();
        assert_eq!(
            project.root().canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_project_discover_fails_without_frt_dir() {
        let tmp = tempdir().unwrap();
        let err = Project::discover_from(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound { .. }));
    }

    #[test]
    fn test_report_path_uses_kind_directory() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();

        let id = ReportId::new(ReportKind::Pnl);
        let path = project.report_path(&id);
        assert!(path.to_string_lossy().contains("reports/panelboards"));
        assert!(path.to_string_lossy().ends_with(".frt.yaml"));
    }
}
