//! Self-location.
//!
//! On Linux `current_exe` reads `/proc/self/exe`, which already points past
//! symlinks. Other platforms may hand back the invoked path, so the result is
//! canonicalized everywhere.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LaunchError;

/// Directory containing the running executable.
pub fn locate_self() -> Result<PathBuf, LaunchError> {
    locate_with(std::env::current_exe)
}

/// Like [`locate_self`] with the executable lookup supplied by the caller.
pub fn locate_with<F>(resolve: F) -> Result<PathBuf, LaunchError>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    let exe = resolve().map_err(|source| LaunchError::PathResolution { source })?;
    // A deleted or replaced binary shows up as "<path> (deleted)" and fails here.
    let exe = exe
        .canonicalize()
        .map_err(|source| LaunchError::PathResolution { source })?;
    debug!(exe = %exe.display(), "resolved launcher executable");
    exe_dir(&exe)
}

/// Parent directory of an executable path.
pub fn exe_dir(exe: &Path) -> Result<PathBuf, LaunchError> {
    match exe.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => Err(LaunchError::PathResolution {
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no parent directory", exe.display()),
            ),
        }),
    }
}
