//! Self-locating launcher for the exogui desktop application.
//!
//! The launcher lives next to the `exogui` binary. It finds its own
//! directory, makes it the working directory, and hands off to
//! `./exogui --no-sandbox`, waiting for the child to finish.
//!
//! Layout
//! - `locate`: resolve the running executable and its directory.
//! - `launch`: switch directory, spawn the child, report the outcome.
//! - `config`: the child command (`LaunchSpec`) and its fixed defaults.
//! - `error`: failure taxonomy and the exit codes it maps to.

pub mod config;
pub mod error;
pub mod launch;
pub mod locate;

pub use config::LaunchSpec;
pub use error::LaunchError;
pub use launch::{run, run_with, spawn_and_wait, switch_dir, LaunchOutcome};
pub use locate::{exe_dir, locate_self, locate_with};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
