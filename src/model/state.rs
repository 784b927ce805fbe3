// file: src/model/state.rs
// version: 1.1.0
// guid: c7e92b05-6f18-4ad3-b4c0-91d2a83e5f06

//! State document emitted by `show -json`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Current provisioned resource set as reported by the tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub terraform_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<StateValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<Value>,
}

/// Output values plus the resource tree of the root module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateValues {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, OutputValue>,
    #[serde(default)]
    pub root_module: ModuleValues,
}

/// A single output value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputValue {
    #[serde(default)]
    pub sensitive: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_spec: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// One module in the state tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleValues {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<StateResource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_modules: Vec<ModuleValues>,
}

/// A provisioned resource instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateResource {
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mode: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Value>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive_values: Option<Value>,
}

impl State {
    /// Walk the module tree and count resource instances
    pub fn resource_count(&self) -> usize {
        fn walk(module: &ModuleValues) -> usize {
            module.resources.len() + module.child_modules.iter().map(walk).sum::<usize>()
        }
        self.values.as_ref().map(|v| walk(&v.root_module)).unwrap_or(0)
    }
}
