// file: src/install/release.rs
// version: 1.2.0
// guid: 6a3c0e81-5f94-4d27-9b10-c8e2d4571a93

//! Release coordinates and download URL construction

use crate::Result;
use url::Url;

/// Version installed when neither an override nor `TF_VERSION` is set
pub const DEFAULT_VERSION: &str = "1.6.6";

/// Release host serving the archives and checksum documents
pub const DEFAULT_BASE_URL: &str = "https://releases.hashicorp.com";

pub const ENV_VERSION: &str = "TF_VERSION";
pub const ENV_OS: &str = "TF_OS";
pub const ENV_ARCH: &str = "TF_ARCH";

/// Fully resolved coordinates of one release archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSpec {
    pub version: String,
    pub os: String,
    pub arch: String,
    base_url: Url,
}

impl ReleaseSpec {
    /// Build a spec from explicit coordinates
    pub fn new(version: &str, os: &str, arch: &str) -> Result<Self> {
        if version.trim().is_empty() {
            return Err(crate::error::DriverError::validation("Release version must not be blank"));
        }
        Ok(Self {
            version: version.to_string(),
            os: os.to_string(),
            arch: arch.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| crate::error::DriverError::config(format!("Invalid base URL: {}", e)))?,
        })
    }

    /// Resolve coordinates from overrides, then environment, then host defaults
    pub fn resolve(
        version: Option<&str>,
        os: Option<&str>,
        arch: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self> {
        let version = pick(version, ENV_VERSION).unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let os = pick(os, ENV_OS).unwrap_or_else(|| std::env::consts::OS.to_string());
        let arch = pick(arch, ENV_ARCH).unwrap_or_else(|| host_arch().to_string());

        let mut spec = Self::new(&version, &os, &arch)?;
        if let Some(base) = base_url {
            spec = spec.with_base_url(base)?;
        }
        Ok(spec)
    }

    /// Replace the release host, for mirrors
    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        self.base_url = Url::parse(base)
            .map_err(|e| crate::error::DriverError::config(format!("Invalid base URL {}: {}", base, e)))?;
        Ok(self)
    }

    /// Archive file name, e.g. `terraform_1.6.6_linux_amd64.zip`
    pub fn archive_name(&self) -> String {
        format!("terraform_{}_{}_{}.zip", self.version, self.os, self.arch)
    }

    pub fn archive_url(&self) -> String {
        format!(
            "{}/terraform/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.version,
            self.archive_name()
        )
    }

    /// URL of the `SHA256SUMS` document covering every archive of the release
    pub fn sums_url(&self) -> String {
        format!(
            "{}/terraform/{}/terraform_{}_SHA256SUMS",
            self.base_url.as_str().trim_end_matches('/'),
            self.version,
            self.version
        )
    }
}

fn pick(explicit: Option<&str>, env_name: &str) -> Option<String> {
    if let Some(value) = explicit {
        return Some(value.to_string());
    }
    std::env::var(env_name).ok().filter(|v| !v.is_empty())
}

/// Map the compiler's arch names onto the release asset names
fn host_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "arm" => "arm",
        other => other,
    }
}
