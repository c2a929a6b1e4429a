//! Directory switch and child handoff.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::{debug, info, warn};

use crate::config::LaunchSpec;
use crate::error::LaunchError;
use crate::locate::locate_with;

/// How the child finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub status: ExitStatus,
}

impl LaunchOutcome {
    /// Exit code the launcher should report: the child's own code, or
    /// `128 + signal` when it was killed.
    pub fn exit_code(&self) -> i32 {
        if let Some(code) = self.status.code() {
            return code;
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(sig) = self.status.signal() {
                return 128 + sig;
            }
        }
        1
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Locate, announce, switch, spawn, wait.
///
/// The directory is written to stdout (no newline) before the child starts.
pub fn run(spec: &LaunchSpec) -> Result<LaunchOutcome, LaunchError> {
    // Unlocked handle: each write takes the lock briefly, none is held across the wait.
    run_with(std::env::current_exe, spec, &mut io::stdout())
}

/// [`run`] with the executable lookup supplied by the caller.
///
/// Nothing is announced, switched or spawned unless `resolve` succeeds.
pub fn run_with<F, W>(
    resolve: F,
    spec: &LaunchSpec,
    out: &mut W,
) -> Result<LaunchOutcome, LaunchError>
where
    F: FnOnce() -> io::Result<PathBuf>,
    W: Write,
{
    let dir = locate_with(resolve)?;
    run_in(&dir, spec, out)
}

/// [`run`] with an already resolved directory and an explicit announcement sink.
pub fn run_in<W: Write>(
    dir: &Path,
    spec: &LaunchSpec,
    out: &mut W,
) -> Result<LaunchOutcome, LaunchError> {
    // The announcement is informational; a closed stdout must not stop the launch.
    if let Err(err) = announce(dir, out) {
        warn!(error = %err, "could not write launch directory to stdout");
    }
    switch_dir(dir)?;
    spawn_and_wait(spec, dir)
}

fn announce<W: Write>(dir: &Path, out: &mut W) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(dir.as_os_str().as_bytes())?;
    }
    #[cfg(not(unix))]
    out.write_all(dir.to_string_lossy().as_bytes())?;
    out.flush()
}

/// Make `dir` the process working directory.
pub fn switch_dir(dir: &Path) -> Result<(), LaunchError> {
    std::env::set_current_dir(dir).map_err(|source| LaunchError::DirectoryChange {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %dir.display(), "changed working directory");
    Ok(())
}

/// Start `spec` from `dir` with inherited stdio and block until it exits.
pub fn spawn_and_wait(spec: &LaunchSpec, dir: &Path) -> Result<LaunchOutcome, LaunchError> {
    let program = spec.program_in(dir);
    debug!(program = %program.display(), args = ?spec.args, "spawning child");
    let status = Command::new(&program)
        .args(&spec.args)
        .envs(spec.envs.iter().map(|(k, v)| (k, v)))
        .current_dir(dir)
        .status()
        .map_err(|source| LaunchError::Spawn {
            program: program.clone(),
            source,
        })?;
    info!(%status, "child exited");
    Ok(LaunchOutcome { status })
}
