// file: src/logging/mod.rs
// version: 1.0.0
// guid: d58f20c4-6b91-4a37-95e0-1c7a4d82e6f5

//! Logging system for the Terraform driver

pub mod logger;

pub use logger::init_logger;
