// file: src/lib.rs
// version: 1.1.0
// guid: 28f4d6a9-0b73-4e58-91c2-6d5e08a3f417

//! # Terraform Driver
//!
//! Programmatic driver for the Terraform CLI. Provisions the tool binary
//! (download, verify, extract), invokes its `init`/`plan`/`apply`/`show`
//! subcommands with constructed argument lists, and decodes the tool's JSON
//! output into typed results.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod install;
pub mod logging;
pub mod model;
pub mod terraform;

pub use error::{DriverError, Result};
pub use install::{InstallOptions, Installation, Installer};
pub use model::{Plan, State, VersionInfo};
pub use terraform::{
    ApplyOptions, ApplyOutcome, InitOptions, PlanOptions, PlanOutcome, Terraform,
};

/// Version information for the driver
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
