// file: src/install/mod.rs
// version: 1.1.0
// guid: 2d7f9b34-8e01-4c5a-b6d8-4a1e30c92f57

//! Binary provisioning module
//!
//! Resolves a release, downloads the platform archive, verifies it against
//! the published checksums, extracts the binary and confirms it runs.

pub mod archive;
pub mod checksum;
pub mod download;
pub mod installer;
pub mod release;
pub mod workspace;

pub use download::NetworkDownloader;
pub use installer::{InstallOptions, Installation, Installer};
pub use release::ReleaseSpec;
pub use workspace::Workspace;
