//!
//! The tested device inspection.
//!

use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

/// The kernel mount table.
const MOUNTS_PATH: &str = "/proc/mounts";

///
/// The tested device status.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The device or one of its partitions is mounted.
    Mounted,
    /// The device is an unmounted block device.
    Available,
    /// The path is not a block device.
    Invalid,
}

///
/// Inspects the tested device before a destructive run.
///
pub fn inspect(path: &Path) -> anyhow::Result<Status> {
    let Ok(metadata) = std::fs::metadata(path) else {
        return Ok(Status::Invalid);
    };
    let canonical = std::fs::canonicalize(path)
        .map_err(|error| anyhow::anyhow!("Device path {path:?} resolving: {error}"))?;

    let mounts = std::fs::read_to_string(MOUNTS_PATH)
        .map_err(|error| anyhow::anyhow!("Mount table {MOUNTS_PATH} reading: {error}"))?;
    if is_mounted(mounts.as_str(), canonical.as_path()) {
        return Ok(Status::Mounted);
    }

    if is_block_device(&metadata) {
        Ok(Status::Available)
    } else {
        Ok(Status::Invalid)
    }
}

///
/// Whether the device or one of its partitions appears as a mount source in `mounts`.
///
pub fn is_mounted(mounts: &str, device: &Path) -> bool {
    let device = device.to_string_lossy();
    mounts
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .any(|source| match source.strip_prefix(device.as_ref()) {
            Some("") => true,
            Some(suffix) => {
                let suffix = suffix.strip_prefix('p').unwrap_or(suffix);
                !suffix.is_empty() && suffix.chars().all(|character| character.is_ascii_digit())
            }
            None => false,
        })
}

///
/// Returns the size of the tested file or device in bytes.
///
pub fn size(path: &Path) -> anyhow::Result<u64> {
    let mut file = std::fs::File::open(path)
        .map_err(|error| anyhow::anyhow!("Device {path:?} opening: {error}"))?;
    let size = file
        .seek(SeekFrom::End(0))
        .map_err(|error| anyhow::anyhow!("Device {path:?} size reading: {error}"))?;
    Ok(size)
}

#[cfg(unix)]
fn is_block_device(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;

    metadata.file_type().is_block_device()
}

#[cfg(not(unix))]
fn is_block_device(_metadata: &std::fs::Metadata) -> bool {
    false
}
