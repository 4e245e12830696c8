//! Atomic file write using the write-rename pattern.
//!
//! Writes to `{path}.tmp`, syncs, then renames over the final path, so a
//! crash mid-write leaves the previous best score intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Atomically replaces the contents of `path` with `data`.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(tmp_path, path)?;

    Ok(())
}
