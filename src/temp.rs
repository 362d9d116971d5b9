//! Scoped temporary directories for one fetch operation.
//!
//! Temp dirs are never created under the current working directory (e.g. when TMPDIR=tmp),
//! since the project directory is also the install destination.

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, io_error};

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a temp directory under `base` that is removed when the returned guard drops.
pub fn scoped_temp_dir_in(base: &Path) -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix("agr-")
        .tempdir_in(base)
        .map_err(|e| io_error(format!("Failed to create temp directory: {e}")))
}
