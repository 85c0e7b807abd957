use std::process::{Command, Stdio};

use clicktochat_core::UrlOpener;
use tracing::debug;

use crate::error::{HostError, Result};
use crate::{check_status, command_from_argv};

/// Hands URLs to the desktop's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    type Error = HostError;

    fn open_url(&self, url: &str) -> Result<()> {
        let (mut command, program) = platform_command(url)?;
        debug!(program = %program, url, "opening link");
        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| HostError::Spawn {
                program: program.clone(),
                source,
            })?;
        check_status(&program, status)
    }
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Result<(Command, String)> {
    let mut command = Command::new("open");
    command.arg(url);
    Ok((command, "open".to_string()))
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Result<(Command, String)> {
    let mut command = Command::new("cmd");
    // The empty string is the window title `start` expects before the target.
    command.args(["/C", "start", ""]).arg(url);
    Ok((command, "cmd".to_string()))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_command(url: &str) -> Result<(Command, String)> {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    Ok((command, "xdg-open".to_string()))
}

#[cfg(not(any(unix, target_os = "windows")))]
fn platform_command(_url: &str) -> Result<(Command, String)> {
    Err(HostError::Unsupported)
}

/// Runs a configured command with the URL appended as its last argument.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    argv: Vec<String>,
}

impl CommandOpener {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl UrlOpener for CommandOpener {
    type Error = HostError;

    fn open_url(&self, url: &str) -> Result<()> {
        let (mut command, program) = command_from_argv(&self.argv)?;
        debug!(program = %program, url, "opening link");
        let status = command
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| HostError::Spawn {
                program: program.clone(),
                source,
            })?;
        check_status(&program, status)
    }
}
