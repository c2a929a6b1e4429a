//! Child command description.
//!
//! Policy
//! - The launcher has one job: start `exogui --no-sandbox`. The defaults are
//!   fixed constants; `LaunchSpec` exists so the command is data rather than a
//!   shell string, and so callers can append forwarded arguments.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Name of the GUI executable, relative to the launcher's directory.
pub const DEFAULT_PROGRAM: &str = "exogui";
/// Electron flag the GUI must always receive.
pub const NO_SANDBOX_FLAG: &str = "--no-sandbox";

/// Program, arguments and environment overrides for the child process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Relative to the launch directory.
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub envs: Vec<(OsString, OsString)>,
}

impl Default for LaunchSpec {
    fn default() -> Self {
        Self::exogui()
    }
}

impl LaunchSpec {
    /// `exogui --no-sandbox` with the inherited environment.
    pub fn exogui() -> Self {
        Self::new(DEFAULT_PROGRAM).arg(NO_SANDBOX_FLAG)
    }

    /// A bare program with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Set `key=value` in the child's environment on top of the inherited one.
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.envs
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    /// Where the program lives once `dir` is the working directory.
    ///
    /// Equivalent to `./<program>` after switching into `dir`; an absolute
    /// `program` is returned unchanged.
    pub fn program_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.program)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]
    use super::*;

    #[test]
    fn default_is_exogui_without_sandbox() {
        let spec = LaunchSpec::default();
        assert_eq!(spec.program, Path::new("exogui"));
        assert_eq!(spec.args, vec![OsString::from("--no-sandbox")]);
        assert!(spec.envs.is_empty());
    }

    #[test]
    fn forwarded_args_follow_the_sandbox_flag() {
        let spec = LaunchSpec::exogui().args(["--help", "game.zip"]);
        assert_eq!(spec.args, ["--no-sandbox", "--help", "game.zip"]);
    }

    #[test]
    fn program_resolves_against_launch_dir() {
        let spec = LaunchSpec::exogui();
        assert_eq!(
            spec.program_in(Path::new("/tmp/app")),
            Path::new("/tmp/app/exogui")
        );
        let abs = LaunchSpec::new("/usr/bin/true");
        assert_eq!(abs.program_in(Path::new("/tmp/app")), Path::new("/usr/bin/true"));
    }

    #[test]
    fn env_overrides_accumulate_in_order() {
        let spec = LaunchSpec::exogui().env("A", "1").env("B", "2");
        assert_eq!(
            spec.envs,
            vec![
                (OsString::from("A"), OsString::from("1")),
                (OsString::from("B"), OsString::from("2")),
            ]
        );
    }
}
