use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code when the launcher itself fails before a child is attempted.
pub const EXIT_LAUNCHER_FAILURE: i32 = 125;
/// Exit code when the child exists but could not be started.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;
/// Exit code when the child executable is missing.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Every way a launch can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot resolve the launcher's own location")]
    PathResolution {
        #[source]
        source: io::Error,
    },

    #[error("cannot change working directory to {}", path.display())]
    DirectoryChange {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot start {}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Process exit code reported for this failure (`env(1)` conventions).
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::PathResolution { .. } | LaunchError::DirectoryChange { .. } => {
                EXIT_LAUNCHER_FAILURE
            }
            LaunchError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            LaunchError::Spawn { .. } => EXIT_CANNOT_EXECUTE,
        }
    }
}
