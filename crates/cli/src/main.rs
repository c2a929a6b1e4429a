use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use exolaunch::{LaunchError, LaunchSpec};

mod logging;

/// Starts `./exogui --no-sandbox` from the directory this binary lives in.
///
/// The launcher has no options of its own; everything on the command line is
/// handed to exogui after `--no-sandbox`.
#[derive(Parser)]
#[command(name = "exogui-launcher")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Arguments forwarded to exogui
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    passthrough: Vec<OsString>,
}

impl Cli {
    /// Parse `argv`, keeping a leading `--` that clap would treat as its own
    /// separator. Electron reads `--` itself, so it is forwarded like any other
    /// argument.
    fn parse_forwarding<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut cli = Self::try_parse_from(&argv)?;
        if argv.get(1).is_some_and(|first| first == "--") {
            cli.passthrough.insert(0, OsString::from("--"));
        }
        Ok(cli)
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_forwarding(std::env::args_os()).unwrap_or_else(|e| e.exit());
    match launch(cli) {
        Ok(code) => exit_code(code),
        Err(err) => {
            eprintln!("exogui-launcher: {err:#}");
            let code = err
                .downcast_ref::<LaunchError>()
                .map_or(1, LaunchError::exit_code);
            exit_code(code)
        }
    }
}

fn launch(cli: Cli) -> Result<i32> {
    let spec = LaunchSpec::exogui().args(&cli.passthrough);
    tracing::debug!(version = exolaunch::VERSION, forwarded = cli.passthrough.len(), "launch");
    let outcome = exolaunch::run(&spec).context("launching exogui")?;
    if !outcome.success() {
        tracing::warn!(code = outcome.exit_code(), "exogui exited unsuccessfully");
    }
    Ok(outcome.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]
    use super::*;

    #[test]
    fn no_arguments_forward_nothing() {
        let cli = Cli::parse_forwarding(["exogui-launcher"]).unwrap();
        assert!(cli.passthrough.is_empty());
    }

    #[test]
    fn flags_are_forwarded_not_interpreted() {
        let cli =
            Cli::parse_forwarding(["exogui-launcher", "--help", "-V", "game.zip"]).unwrap();
        assert_eq!(cli.passthrough, ["--help", "-V", "game.zip"]);
    }

    #[test]
    fn separator_is_forwarded_wherever_it_appears() {
        let leading = Cli::parse_forwarding(["exogui-launcher", "--", "foo"]).unwrap();
        assert_eq!(leading.passthrough, ["--", "foo"]);

        let middle = Cli::parse_forwarding(["exogui-launcher", "foo", "--", "bar"]).unwrap();
        assert_eq!(middle.passthrough, ["foo", "--", "bar"]);

        let doubled = Cli::parse_forwarding(["exogui-launcher", "--", "--"]).unwrap();
        assert_eq!(doubled.passthrough, ["--", "--"]);
    }
}
