// file: src/model/mod.rs
// version: 1.0.0
// guid: 8a1d4f62-0c3b-47e9-9a85-2b6c1e0d7f44

//! Typed views of the JSON documents Terraform emits
//!
//! Structural fields are typed; open-ended payloads (resource attributes,
//! checks, configuration) stay `serde_json::Value` since their shape is
//! provider-defined.

pub mod plan;
pub mod state;
pub mod version;

pub use plan::{ActionCounts, ActionKind, Change, Plan, ResourceChange};
pub use state::{ModuleValues, OutputValue, State, StateResource, StateValues};
pub use version::VersionInfo;
