// file: src/model/plan.rs
// version: 1.1.0
// guid: d94f1c83-2a5e-4b07-8e61-7c0b3a92d415

//! Plan document emitted by `show -json <planfile>`

use super::state::StateValues;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Proposed set of resource changes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub terraform_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(default)]
    pub planned_values: StateValues,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_drift: Vec<ResourceChange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_changes: Vec<ResourceChange>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub output_changes: BTreeMap<String, Change>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_state: Option<Value>,
    #[serde(rename = "configuration", default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_attributes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<Value>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
    #[serde(default)]
    pub errored: bool,
}

/// Planned change for a single resource instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceChange {
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub module_address: String,
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
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deposed: String,
    #[serde(default)]
    pub change: Change,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action_reason: String,
}

/// Before/after pair with the action list that connects them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Change {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_unknown: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_sensitive: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_sensitive: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_paths: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importing: Option<Value>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generated_config: String,
}

/// Collapsed view of an action list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Update,
    Delete,
    Replace,
    Read,
    NoOp,
}

impl Change {
    /// Collapse the action list into a single kind.
    ///
    /// The tool encodes replacement as a two-element list whose order
    /// signals create-before-destroy or destroy-before-create; both
    /// collapse to `Replace` here.
    pub fn action_kind(&self) -> ActionKind {
        let actions: Vec<&str> = self.actions.iter().map(String::as_str).collect();
        match actions.as_slice() {
            ["create"] => ActionKind::Create,
            ["update"] => ActionKind::Update,
            ["delete"] => ActionKind::Delete,
            ["read"] => ActionKind::Read,
            ["create", "delete"] | ["delete", "create"] => ActionKind::Replace,
            _ => ActionKind::NoOp,
        }
    }
}

/// Per-kind tally over a plan's resource changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCounts {
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub replace: usize,
    pub read: usize,
    pub noop: usize,
}

impl Plan {
    /// Tally resource changes by action kind
    pub fn action_counts(&self) -> ActionCounts {
        let mut counts = ActionCounts::default();
        for rc in &self.resource_changes {
            match rc.change.action_kind() {
                ActionKind::Create => counts.create += 1,
                ActionKind::Update => counts.update += 1,
                ActionKind::Delete => counts.delete += 1,
                ActionKind::Replace => counts.replace += 1,
                ActionKind::Read => counts.read += 1,
                ActionKind::NoOp => counts.noop += 1,
            }
        }
        counts
    }

    /// True when at least one resource change does real work
    pub fn has_changes(&self) -> bool {
        let counts = self.action_counts();
        counts.create + counts.update + counts.delete + counts.replace > 0
    }
}
