// file: src/terraform/show.rs
// version: 1.1.0
// guid: 9a64e0b7-1c58-4d93-8f26-b05d3a7e41c9

//! `show` subcommand driver
//!
//! With a plan file the tool renders that plan; with no path it renders the
//! current state.

use super::{with_chdir, Terraform};
use crate::model::{Plan, State};
use crate::Result;
use std::path::Path;

pub(crate) fn build_show_args(chdir: Option<&str>, plan_path: Option<&Path>) -> Vec<String> {
    let mut args = vec!["show".to_string(), "-json".to_string()];
    if let Some(path) = plan_path {
        args.push(path.display().to_string());
    }
    with_chdir(chdir, args)
}

impl Terraform {
    /// Decode the current state
    pub async fn show_state(&self, chdir: Option<&str>) -> Result<State> {
        let output = self.runner().run(&build_show_args(chdir, None)).await?;
        Ok(serde_json::from_str(&output.stdout)?)
    }

    /// Decode a saved plan file
    pub async fn show_plan(&self, plan_path: &Path, chdir: Option<&str>) -> Result<Plan> {
        let output = self
            .runner()
            .run(&build_show_args(chdir, Some(plan_path)))
            .await?;
        Ok(serde_json::from_str(&output.stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_args() {
        assert_eq!(build_show_args(None, None), vec!["show", "-json"]);
    }

    #[test]
    fn test_plan_args_with_chdir() {
        let args = build_show_args(Some("./stack"), Some(Path::new("/tmp/tf/output.tfplan")));

        assert_eq!(
            args,
            vec!["-chdir=./stack", "show", "-json", "/tmp/tf/output.tfplan"]
        );
    }
}
