// file: src/terraform/mod.rs
// version: 1.2.0
// guid: 1e94d7c6-3b08-4f52-a8e1-6c50b2d94a77

//! Command driver module
//!
//! Assembles argument lists for the wrapped subcommands, invokes the
//! provisioned binary and decodes its JSON output.

pub mod apply;
pub mod init;
pub mod plan;
pub mod show;
pub mod varfile;

pub use apply::{ApplyOptions, ApplyOutcome};
pub use init::InitOptions;
pub use plan::{PlanOptions, PlanOutcome};

use crate::exec::CommandRunner;
use crate::install::Workspace;
use crate::model::VersionInfo;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Driver bound to one provisioned binary and one workspace
#[derive(Debug)]
pub struct Terraform {
    runner: CommandRunner,
    workspace: Workspace,
}

impl Terraform {
    pub fn new<P: Into<PathBuf>>(exec_path: P, workspace: Workspace) -> Self {
        Self {
            runner: CommandRunner::new(exec_path.into()),
            workspace,
        }
    }

    pub fn exec_path(&self) -> &Path {
        self.runner.exec_path()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    /// Decode `version -json`
    pub async fn version(&self) -> Result<VersionInfo> {
        let output = self
            .runner
            .run(&["version".to_string(), "-json".to_string()])
            .await?;
        let info: VersionInfo = serde_json::from_str(&output.stdout)?;
        debug!("Terraform version: {}", info.terraform_version);
        Ok(info)
    }
}

/// Prepend the working-directory override; it is a global flag and must
/// precede the subcommand
pub(crate) fn with_chdir(chdir: Option<&str>, mut args: Vec<String>) -> Vec<String> {
    if let Some(dir) = chdir {
        args.insert(0, format!("-chdir={}", dir));
    }
    args
}
