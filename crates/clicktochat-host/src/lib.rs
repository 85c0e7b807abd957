//! Desktop stand-ins for the open/share primitives a phone would provide.

pub mod error;
pub mod open;
pub mod share;

use std::process::{Command, ExitStatus, Output};

use clicktochat_config::{OpenConfig, ShareConfig};
use clicktochat_core::{TextSharer, UrlOpener};

use crate::error::{HostError, Result};

pub use open::{CommandOpener, SystemOpener};
pub use share::{CommandSharer, StdoutSharer};

pub type DynOpener = Box<dyn UrlOpener<Error = HostError>>;
pub type DynSharer = Box<dyn TextSharer<Error = HostError>>;

pub fn opener_from_config(config: &OpenConfig) -> DynOpener {
    match &config.command {
        Some(argv) => Box::new(CommandOpener::new(argv.clone())),
        None => Box::new(SystemOpener),
    }
}

pub fn sharer_from_config(config: &ShareConfig) -> DynSharer {
    match config {
        ShareConfig::Stdout => Box::new(StdoutSharer),
        ShareConfig::Command(argv) => Box::new(CommandSharer::new(argv.clone())),
    }
}

/// Splits a configured argv into a `Command` plus its program name.
pub(crate) fn command_from_argv(argv: &[String]) -> Result<(Command, String)> {
    let (program, args) = argv.split_first().ok_or(HostError::EmptyCommand)?;
    let mut command = Command::new(program);
    command.args(args);
    Ok((command, program.clone()))
}

pub(crate) fn check_status(program: &str, status: ExitStatus) -> Result<()> {
    failure(program, status, String::new())
}

/// Like [`check_status`], keeping the command's stderr for the error message.
pub(crate) fn check_output(program: &str, output: &Output) -> Result<()> {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    failure(program, output.status, stderr)
}

fn failure(program: &str, status: ExitStatus, stderr: String) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    Err(HostError::CommandFailed {
        program: program.to_string(),
        status: status.to_string(),
        stderr,
    })
}
