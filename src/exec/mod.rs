// file: src/exec/mod.rs
// version: 1.0.0
// guid: 5b2e8d91-4c07-4f3a-a6d2-0e9f17c84b53

//! Subprocess invocation module

pub mod runner;

pub use runner::{CommandOutput, CommandRunner};
