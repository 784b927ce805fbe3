// file: src/terraform/apply.rs
// version: 1.2.0
// guid: 06e8d2f5-7a34-4b91-bc08-59f2e1c6d703

//! `apply` subcommand driver

use super::{show, with_chdir, Terraform};
use crate::install::Workspace;
use crate::model::State;
use crate::Result;
use std::path::{Path, PathBuf};

pub const APPLY_PLAN_FILE_NAME: &str = "plan.tfplan";

/// Options for applying a previously produced plan.
///
/// Exactly one of `plan_binary` and `plan_path` must be set.
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub chdir: Option<String>,
    pub plan_binary: Option<Vec<u8>>,
    pub plan_path: Option<PathBuf>,
}

/// State after the apply plus the human-readable log
#[derive(Debug)]
pub struct ApplyOutcome {
    pub state: State,
    pub logs: Vec<String>,
}

impl ApplyOptions {
    /// Validate the binary/path pair and return a plan file on disk,
    /// writing the binary into the workspace when needed
    pub(crate) async fn resolve_plan_file(&self, workspace: &Workspace) -> Result<PathBuf> {
        match (&self.plan_binary, &self.plan_path) {
            (None, None) => Err(crate::error::DriverError::validation(
                "Plan binary or path must be provided",
            )),
            (Some(_), Some(_)) => Err(crate::error::DriverError::validation(
                "Plan binary and path cannot both be provided",
            )),
            (None, Some(path)) => Ok(path.clone()),
            (Some(bytes), None) => {
                let path = workspace.join(APPLY_PLAN_FILE_NAME);
                tokio::fs::write(&path, bytes).await?;
                Ok(path)
            }
        }
    }

    pub fn build_args(&self, plan_file: &Path) -> Vec<String> {
        let args = vec![
            "apply".to_string(),
            "-no-color".to_string(),
            "-auto-approve".to_string(),
            plan_file.display().to_string(),
        ];
        with_chdir(self.chdir.as_deref(), args)
    }
}

impl Terraform {
    /// Apply a saved plan and decode the resulting state
    pub async fn apply(&self, options: &ApplyOptions) -> Result<ApplyOutcome> {
        let plan_file = options.resolve_plan_file(self.workspace()).await?;
        let output = self.runner().run(&options.build_args(&plan_file)).await?;

        let show_args = show::build_show_args(options.chdir.as_deref(), None);
        let show_output = self.runner().run(&show_args).await?;
        let state: State = serde_json::from_str(&show_output.stdout)?;

        Ok(ApplyOutcome {
            state,
            logs: output.stdout_lines(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_neither_binary_nor_path_rejected() {
        let workspace = Workspace::temporary().unwrap();
        let options = ApplyOptions::default();

        let err = options.resolve_plan_file(&workspace).await.unwrap_err();

        assert!(matches!(err, crate::error::DriverError::Validation(_)));
    }

    #[tokio::test]
    async fn test_both_binary_and_path_rejected() {
        let workspace = Workspace::temporary().unwrap();
        let options = ApplyOptions {
            plan_binary: Some(vec![1, 2, 3]),
            plan_path: Some(PathBuf::from("saved.tfplan")),
            ..Default::default()
        };

        let err = options.resolve_plan_file(&workspace).await.unwrap_err();

        assert!(matches!(err, crate::error::DriverError::Validation(_)));
    }

    #[tokio::test]
    async fn test_binary_written_into_workspace() {
        let workspace = Workspace::temporary().unwrap();
        let options = ApplyOptions {
            plan_binary: Some(b"plan bytes".to_vec()),
            ..Default::default()
        };

        let path = options.resolve_plan_file(&workspace).await.unwrap();

        assert_eq!(path, workspace.join(APPLY_PLAN_FILE_NAME));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"plan bytes");
    }

    #[tokio::test]
    async fn test_existing_path_passed_through() {
        let workspace = Workspace::temporary().unwrap();
        let options = ApplyOptions {
            plan_path: Some(PathBuf::from("saved.tfplan")),
            ..Default::default()
        };

        let path = options.resolve_plan_file(&workspace).await.unwrap();

        assert_eq!(path, PathBuf::from("saved.tfplan"));
    }

    #[test]
    fn test_build_args() {
        let options = ApplyOptions {
            chdir: Some("./stack".to_string()),
            plan_path: Some(PathBuf::from("saved.tfplan")),
            ..Default::default()
        };

        assert_eq!(
            options.build_args(Path::new("saved.tfplan")),
            vec!["-chdir=./stack", "apply", "-no-color", "-auto-approve", "saved.tfplan"]
        );
    }
}
