// file: src/config/mod.rs
// version: 1.1.0
// guid: 72c5a9e0-8d14-4f63-b2a7-e09c6d3851f4

//! Driver configuration
//!
//! An optional YAML file supplies defaults the CLI flags layer on top of.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use url::Url;

/// File-sourced defaults for provisioning and invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// Release version to provision; environment and host defaults apply
    /// when unset
    pub terraform_version: Option<String>,
    pub install_dir: Option<PathBuf>,
    pub release_base_url: Option<String>,
    pub skip_verify: bool,
    /// Working-directory override passed through as `-chdir`
    pub chdir: Option<String>,
    pub backend_config: BTreeMap<String, String>,
    pub vars: BTreeMap<String, Value>,
    pub targets: Vec<String>,
}

impl DriverConfig {
    /// Validate field contents beyond what serde enforces
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(version) = &self.terraform_version {
            if version.trim().is_empty() {
                return Err(crate::error::DriverError::validation(
                    "terraform_version must not be blank",
                ));
            }
        }

        if let Some(base) = &self.release_base_url {
            Url::parse(base).map_err(|e| {
                crate::error::DriverError::validation(format!(
                    "Invalid release_base_url {}: {}",
                    base, e
                ))
            })?;
        }

        Ok(())
    }
}
