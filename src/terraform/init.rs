// file: src/terraform/init.rs
// version: 1.1.0
// guid: f2a85c19-6d03-4e47-b8f2-3c91e0d56a84

//! `init` subcommand driver

use super::{with_chdir, Terraform};
use crate::Result;
use std::collections::BTreeMap;
use tracing::debug;

/// Options for working-directory initialization
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub chdir: Option<String>,
    pub upgrade: bool,
    pub reconfigure: bool,
    pub migrate_state: bool,
    /// Ordered so the argument list is stable across runs
    pub backend_config: BTreeMap<String, String>,
}

impl InitOptions {
    pub fn build_args(&self) -> Vec<String> {
        let mut args = vec!["init".to_string()];
        if self.upgrade {
            args.push("-upgrade".to_string());
        }
        if self.reconfigure {
            args.push("-reconfigure".to_string());
        }
        if self.migrate_state {
            args.push("-migrate-state".to_string());
        }
        for (key, value) in &self.backend_config {
            args.push(format!("-backend-config={}={}", key, value));
        }
        with_chdir(self.chdir.as_deref(), args)
    }
}

impl Terraform {
    /// Initialize the working directory
    pub async fn init(&self, options: &InitOptions) -> Result<()> {
        let output = self.runner().run(&options.build_args()).await?;
        debug!("{}", output.stdout);
        Ok(())
    }
}
