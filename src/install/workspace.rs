// file: src/install/workspace.rs
// version: 1.0.1
// guid: 7e5b2d40-9c16-48f3-a2e7-1d84f6093c28

//! Scratch directory for archives, variable files and plan artifacts

use crate::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

pub const ENV_TEMP_DIR: &str = "TF_TEMP_DIR";

/// Working directory for driver artifacts.
///
/// A temporary workspace is removed when the value is dropped; a directory
/// named via `TF_TEMP_DIR` or [`Workspace::at`] is left in place.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    _temp: Option<TempDir>,
}

impl Workspace {
    /// Honor `TF_TEMP_DIR` when set, otherwise create a temporary directory
    pub fn resolve() -> Result<Self> {
        match std::env::var(ENV_TEMP_DIR) {
            Ok(dir) if !dir.is_empty() => Self::at(dir),
            _ => Self::temporary(),
        }
    }

    /// Use a fixed directory, creating it if needed
    pub fn at<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let root = dir.into();
        std::fs::create_dir_all(&root)?;
        debug!("Using workspace {}", root.display());
        Ok(Self { root, _temp: None })
    }

    /// Create a process-lifetime temporary workspace
    pub fn temporary() -> Result<Self> {
        let temp = tempfile::Builder::new().prefix("tf").tempdir()?;
        debug!("Using temp workspace {}", temp.path().display());
        Ok(Self {
            root: temp.path().to_path_buf(),
            _temp: Some(temp),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_creates_directory() {
        let base = tempfile::TempDir::new().unwrap();
        let nested = base.path().join("a").join("b");

        let ws = Workspace::at(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(ws.root(), nested.as_path());
    }

    #[test]
    fn test_temporary_workspace_exists_and_cleans_up() {
        let path;
        {
            let ws = Workspace::temporary().unwrap();
            path = ws.root().to_path_buf();
            assert!(path.is_dir());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_join() {
        let ws = Workspace::temporary().unwrap();

        assert_eq!(ws.join("vars.tfvars.json"), ws.root().join("vars.tfvars.json"));
    }
}
