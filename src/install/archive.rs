// file: src/install/archive.rs
// version: 1.0.1
// guid: 4f92c1d8-0a67-4b35-9e82-d73b5c041e69

//! Zip extraction of the release archive

use crate::Result;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extract a single named member into a directory and mark it executable.
///
/// Returns the path of the extracted file. The release archives carry the
/// binary at the archive root, so no directory components are expected in
/// `member`.
pub fn extract_binary(archive_path: &Path, dest_dir: &Path, member: &str) -> Result<PathBuf> {
    debug!(
        "Extracting {} from {} to {}",
        member,
        archive_path.display(),
        dest_dir.display()
    );

    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut entry = archive.by_name(member).map_err(|_| {
        crate::error::DriverError::install(format!(
            "Archive {} does not contain {}",
            archive_path.display(),
            member
        ))
    })?;

    std::fs::create_dir_all(dest_dir)?;
    let out_path = dest_dir.join(member);
    let mut out_file = File::create(&out_path)?;
    io::copy(&mut entry, &mut out_file)?;
    drop(out_file);

    mark_executable(&out_path)?;
    Ok(out_path)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
