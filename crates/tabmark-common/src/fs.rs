//! Crash-safe file writes shared by the bookmark and session stores.

use std::path::Path;

use tracing::{debug, warn};

use crate::errors::StoreError;

/// Write `bytes` to `path` via a `.tmp` sibling and a rename, creating the
/// parent directory first. If the rename fails the file is written
/// directly instead.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    std::fs::write(tmp_path, bytes).map_err(|source| StoreError::Write {
        path: tmp_path.to_path_buf(),
        source,
    })?;

    if let Err(e) = std::fs::rename(tmp_path, path) {
        warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(tmp_path);
        std::fs::write(path, bytes).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    debug!(path = %path.display(), bytes = bytes.len(), "file saved");
    Ok(())
}
