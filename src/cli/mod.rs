// file: src/cli/mod.rs
// version: 1.0.0
// guid: c31e85f7-9a02-4d46-b8c5-703f9e1d2a64

//! Command line interface for the Terraform driver

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
