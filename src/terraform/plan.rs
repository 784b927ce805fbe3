// file: src/terraform/plan.rs
// version: 1.2.0
// guid: 5d07b3e8-9f41-4c26-a0d5-84e1c7f30b92

//! `plan` subcommand driver

use super::{show, varfile, with_chdir, Terraform};
use crate::model::Plan;
use crate::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const PLAN_FILE_NAME: &str = "output.tfplan";

/// Options for producing a plan
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub chdir: Option<String>,
    pub destroy: bool,
    pub targets: Vec<String>,
    /// Materialized into a JSON tfvars file in the workspace when non-empty
    pub vars: BTreeMap<String, Value>,
    /// Pre-existing variable file passed through unchanged
    pub var_file: Option<PathBuf>,
}

/// Decoded plan plus the artifacts needed to apply it later
#[derive(Debug)]
pub struct PlanOutcome {
    pub plan: Plan,
    pub plan_binary: Vec<u8>,
    pub plan_path: PathBuf,
    pub logs: Vec<String>,
}

impl PlanOptions {
    /// Assemble the argument vector; `generated_var_file` is the
    /// materialized vars file, if any
    pub fn build_args(&self, generated_var_file: Option<&Path>, out_path: &Path) -> Vec<String> {
        let mut args = vec!["plan".to_string()];
        if let Some(var_file) = &self.var_file {
            args.push(format!("-var-file={}", var_file.display()));
        }
        if let Some(var_file) = generated_var_file {
            args.push(format!("-var-file={}", var_file.display()));
        }
        if self.destroy {
            args.push("-destroy".to_string());
        }
        for target in &self.targets {
            args.push(format!("-target={}", target));
        }
        args.push("-input=false".to_string());
        args.push("-no-color".to_string());
        args.push(format!("-out={}", out_path.display()));
        with_chdir(self.chdir.as_deref(), args)
    }
}

impl Terraform {
    /// Produce a plan, read back the binary artifact and decode the JSON
    /// rendering via `show`
    pub async fn plan(&self, options: &PlanOptions) -> Result<PlanOutcome> {
        let generated_var_file = if options.vars.is_empty() {
            None
        } else {
            Some(varfile::write_var_file(&options.vars, self.workspace().root()).await?)
        };

        let plan_path = self.workspace().join(PLAN_FILE_NAME);
        let args = options.build_args(generated_var_file.as_deref(), &plan_path);
        let output = self.runner().run(&args).await?;

        let plan_binary = tokio::fs::read(&plan_path).await.map_err(|e| {
            crate::error::DriverError::execution(format!(
                "Failed to read plan output {}: {}",
                plan_path.display(),
                e
            ))
        })?;

        let show_args = show::build_show_args(options.chdir.as_deref(), Some(&plan_path));
        let show_output = self.runner().run(&show_args).await?;
        let plan: Plan = serde_json::from_str(&show_output.stdout)?;

        Ok(PlanOutcome {
            plan,
            plan_binary,
            plan_path,
            logs: output.stdout_lines(),
        })
    }
}
