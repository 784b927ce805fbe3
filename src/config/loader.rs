// file: src/config/loader.rs
// version: 1.1.0
// guid: ba40d7f3-1e26-4958-8c07-62a1f5e09d38

//! Configuration file loading and environment variable substitution

use super::DriverConfig;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Loads YAML configuration with `${VAR}` substitution from the process
/// environment
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load driver configuration from a YAML file
    pub fn load_driver_config<P: AsRef<Path>>(&self, path: P) -> Result<DriverConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::DriverError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let config: DriverConfig = serde_yaml::from_str(&expanded)?;

        config.validate()?;

        Ok(config)
    }

    /// Expand `${VAR}` references; unknown variables are an error
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| crate::error::DriverError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(crate::error::DriverError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
