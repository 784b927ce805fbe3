// file: src/install/installer.rs
// version: 1.3.0
// guid: 0b86e4a2-5d13-4c79-9f40-a27c1e58d396

//! Provisioning orchestration
//!
//! Resolves the release, reuses a cached install when the version matches,
//! otherwise downloads, verifies, extracts and probes the binary.

use super::{archive, checksum, release::ReleaseSpec, NetworkDownloader, Workspace};
use crate::exec::CommandRunner;
use crate::model::VersionInfo;
use crate::terraform::Terraform;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[cfg(windows)]
pub const BINARY_NAME: &str = "terraform.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "terraform";

const RECORD_FILE: &str = "install.json";

/// Knobs for one provisioning run; unset fields fall back to environment
/// overrides and then to host defaults
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub version: Option<String>,
    pub os: Option<String>,
    pub arch: Option<String>,
    pub base_url: Option<String>,
    pub install_dir: Option<PathBuf>,
    pub skip_verify: bool,
}

/// Metadata written next to an installed binary so later runs can reuse it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallRecord {
    pub version: String,
    pub os: String,
    pub arch: String,
    pub sha256: String,
    pub exec_path: PathBuf,
    pub installed_at: DateTime<Utc>,
}

/// Handle to a provisioned binary, ready to drive
#[derive(Debug)]
pub struct Installation {
    pub exec_path: PathBuf,
    pub version: String,
    pub workspace: Workspace,
}

impl Installation {
    /// Wrap the installation in the command driver
    pub fn terraform(self) -> Terraform {
        Terraform::new(self.exec_path, self.workspace)
    }
}

/// Downloads and installs release binaries
pub struct Installer {
    downloader: NetworkDownloader,
    options: InstallOptions,
}

impl Installer {
    pub fn new(options: InstallOptions) -> Self {
        Self {
            downloader: NetworkDownloader::new(),
            options,
        }
    }

    /// Provision a binary per the options and return a usable handle
    pub async fn install(&self) -> Result<Installation> {
        let spec = ReleaseSpec::resolve(
            self.options.version.as_deref(),
            self.options.os.as_deref(),
            self.options.arch.as_deref(),
            self.options.base_url.as_deref(),
        )?;
        let workspace = Workspace::resolve()?;

        let install_dir = match &self.options.install_dir {
            Some(dir) => dir.clone(),
            None => default_install_dir(&spec.version)?,
        };

        if let Some(existing) = self.reusable_install(&spec, &install_dir).await {
            info!(
                "Reusing terraform {} at {}",
                existing.version,
                existing.exec_path.display()
            );
            return Ok(Installation {
                exec_path: existing.exec_path,
                version: existing.version,
                workspace,
            });
        }

        let archive_path = workspace.join(&spec.archive_name());
        self.downloader
            .download_with_progress(&spec.archive_url(), &archive_path)
            .await?;

        let sha256 = if self.options.skip_verify {
            debug!("Checksum verification skipped");
            checksum::file_digest(&archive_path).await?
        } else {
            let sums = self.downloader.fetch_text(&spec.sums_url()).await?;
            checksum::verify_archive(&archive_path, &sums, &spec.archive_name()).await?
        };

        let exec_path = archive::extract_binary(&archive_path, &install_dir, BINARY_NAME)?;

        let probed = probe_version(&exec_path).await?;
        if probed.terraform_version != spec.version {
            warn!(
                "Requested terraform {} but binary reports {}",
                spec.version, probed.terraform_version
            );
        }

        let record = InstallRecord {
            version: probed.terraform_version.clone(),
            os: spec.os.clone(),
            arch: spec.arch.clone(),
            sha256,
            exec_path: exec_path.clone(),
            installed_at: Utc::now(),
        };
        write_record(&install_dir, &record).await?;

        info!(
            "Installed terraform {} at {}",
            record.version,
            exec_path.display()
        );

        Ok(Installation {
            exec_path,
            version: record.version,
            workspace,
        })
    }

    /// A prior install is reusable when its record matches the requested
    /// release and the binary is still on disk
    async fn reusable_install(&self, spec: &ReleaseSpec, install_dir: &Path) -> Option<InstallRecord> {
        let record = read_record(install_dir).await?;
        if record.version == spec.version
            && record.os == spec.os
            && record.arch == spec.arch
            && record.exec_path.is_file()
        {
            Some(record)
        } else {
            None
        }
    }
}

/// Run `version -json` against a binary and decode the result
pub async fn probe_version(exec_path: &Path) -> Result<VersionInfo> {
    let runner = CommandRunner::new(exec_path);
    let output = runner
        .run(&["version".to_string(), "-json".to_string()])
        .await?;
    let info: VersionInfo = serde_json::from_str(&output.stdout)?;
    debug!("Terraform version: {}", info.terraform_version);
    Ok(info)
}

/// Per-version cache directory under the user cache root
pub fn default_install_dir(version: &str) -> Result<PathBuf> {
    let base = dirs::cache_dir()
        .ok_or_else(|| crate::error::DriverError::config("No user cache directory available"))?;
    Ok(base.join("terraform-driver").join(version))
}

async fn read_record(install_dir: &Path) -> Option<InstallRecord> {
    let raw = tokio::fs::read_to_string(install_dir.join(RECORD_FILE)).await.ok()?;
    serde_json::from_str(&raw).ok()
}

async fn write_record(install_dir: &Path, record: &InstallRecord) -> Result<()> {
    let raw = serde_json::to_string_pretty(record)?;
    tokio::fs::write(install_dir.join(RECORD_FILE), raw).await?;
    Ok(())
}
