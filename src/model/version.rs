// file: src/model/version.rs
// version: 1.0.0
// guid: a6d30f91-4e82-4c57-b019-8f2c7d465e03

//! Version document emitted by `version -json`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub terraform_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub platform: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub provider_selections: BTreeMap<String, Value>,
    #[serde(default)]
    pub terraform_outdated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_version_document() {
        let json = r#"{
            "terraform_version": "1.6.6",
            "platform": "linux_amd64",
            "provider_selections": {},
            "terraform_outdated": true
        }"#;

        let info: VersionInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.terraform_version, "1.6.6");
        assert_eq!(info.platform, "linux_amd64");
        assert!(info.terraform_outdated);
    }
}
