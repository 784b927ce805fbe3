// file: src/terraform/varfile.rs
// version: 1.0.0
// guid: 83c16f04-2e97-4da8-b5c3-07d9e4a21f68

//! Variable file materialization
//!
//! Input variables are written as a JSON tfvars file, which the tool
//! consumes natively via `-var-file`.

use crate::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const VAR_FILE_NAME: &str = "vars.tfvars.json";

/// Write the variables into `dir` and return the file path
pub async fn write_var_file(vars: &BTreeMap<String, Value>, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(VAR_FILE_NAME);
    let body = serde_json::to_string_pretty(vars)?;
    tokio::fs::write(&path, body).await?;
    debug!("Wrote {} variables to {}", vars.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_write_var_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut vars = BTreeMap::new();
        vars.insert("region".to_string(), json!("eu-west-1"));
        vars.insert("instance_count".to_string(), json!(3));
        vars.insert("tags".to_string(), json!({"team": "platform", "env": "prod"}));

        let path = write_var_file(&vars, dir.path()).await.unwrap();

        assert_eq!(path.file_name().unwrap(), VAR_FILE_NAME);
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: BTreeMap<String, Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, vars);
    }

    #[tokio::test]
    async fn test_write_var_file_empty_map() {
        let dir = tempfile::TempDir::new().unwrap();

        let path = write_var_file(&BTreeMap::new(), dir.path()).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw.trim(), "{}");
    }
}
