// file: src/install/checksum.rs
// version: 1.0.0
// guid: e1c68a93-7b25-4f08-bd41-90f3a6e25d17

//! SHA-256 verification of downloaded archives

use crate::Result;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::debug;

/// Compute the hex SHA-256 digest of a file
pub async fn file_digest<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = tokio::fs::read(&path).await?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Find the digest for a file name in a `SHA256SUMS` document.
///
/// Lines are `<hex digest><whitespace><file name>`; unrelated lines are
/// skipped.
pub fn find_digest(sums: &str, file_name: &str) -> Option<String> {
    for line in sums.lines() {
        let mut parts = line.split_whitespace();
        let (Some(digest), Some(name)) = (parts.next(), parts.next()) else {
            continue;
        };
        // Some tools prefix the name with '*' for binary mode
        if name.trim_start_matches('*') == file_name {
            return Some(digest.to_ascii_lowercase());
        }
    }
    None
}

/// Verify an archive against the release's checksum document
pub async fn verify_archive<P: AsRef<Path>>(
    archive: P,
    sums_document: &str,
    archive_name: &str,
) -> Result<String> {
    let expected = find_digest(sums_document, archive_name).ok_or_else(|| {
        crate::error::DriverError::checksum(format!(
            "No checksum entry for {} in SHA256SUMS",
            archive_name
        ))
    })?;

    let actual = file_digest(&archive).await?;
    if actual != expected {
        return Err(crate::error::DriverError::checksum(format!(
            "Digest mismatch for {}: expected {}, got {}",
            archive_name, expected, actual
        )));
    }

    debug!("Checksum verified for {}", archive_name);
    Ok(actual)
}
