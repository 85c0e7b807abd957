use std::io::{self, Write};
use std::process::Stdio;

use clicktochat_core::TextSharer;
use tracing::debug;

use crate::error::{HostError, Result};
use crate::{check_output, command_from_argv};

/// Prints the shared text, one item per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSharer;

impl TextSharer for StdoutSharer {
    type Error = HostError;

    fn share_text(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Pipes the shared text into a configured command such as `wl-copy`.
///
/// The command's stdout is discarded and its stderr is only surfaced in
/// [`HostError::CommandFailed`], so nothing lands on a terminal the caller owns.
#[derive(Debug, Clone)]
pub struct CommandSharer {
    argv: Vec<String>,
}

impl CommandSharer {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl TextSharer for CommandSharer {
    type Error = HostError;

    fn share_text(&self, text: &str) -> Result<()> {
        let (mut command, program) = command_from_argv(&self.argv)?;
        debug!(program = %program, "sharing link");
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HostError::Spawn {
                program: program.clone(),
                source,
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            // A command that exits without reading is judged by its status below.
            if let Err(err) = stdin.write_all(text.as_bytes()) {
                if err.kind() != io::ErrorKind::BrokenPipe {
                    drop(stdin);
                    let _ = child.wait_with_output();
                    return Err(err.into());
                }
            }
        }
        let output = child.wait_with_output()?;
        check_output(&program, &output)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::CommandSharer;
    use crate::error::HostError;
    use clicktochat_core::{share_link, Dispatch, TextSharer};
    use std::fs;
    use tempfile::TempDir;

    fn sh(script: &str) -> CommandSharer {
        CommandSharer::new(vec!["sh".to_string(), "-c".to_string(), script.to_string()])
    }

    #[test]
    fn command_sharer_writes_text_to_stdin() {
        let temp = TempDir::new().expect("tempdir");
        let out = temp.path().join("shared.txt");
        let script = format!("cat > '{}'", out.display());
        let sharer = sh(&script);

        let result = share_link(&sharer, "https://wa.me/?text=hi").expect("share");
        assert_eq!(result, Dispatch::Sent);
        assert_eq!(
            fs::read_to_string(&out).expect("read"),
            "https://wa.me/?text=hi"
        );
    }

    #[test]
    fn command_sharer_reports_failing_command() {
        let sharer = CommandSharer::new(vec!["false".to_string()]);
        let err = sharer.share_text("https://wa.me/1").unwrap_err();
        assert!(matches!(err, HostError::CommandFailed { .. }));
    }

    #[test]
    fn command_sharer_keeps_stderr_in_error() {
        let sharer = sh("cat >/dev/null; echo 'cannot open display' >&2; exit 1");
        let err = sharer.share_text("https://wa.me/1").unwrap_err();
        match &err {
            HostError::CommandFailed { program, stderr, .. } => {
                assert_eq!(program, "sh");
                assert_eq!(stderr, "cannot open display");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().ends_with(": cannot open display"));
    }

    #[test]
    fn command_sharer_succeeds_when_command_chatters() {
        let sharer = sh("cat >/dev/null; echo copied; echo warning >&2");
        sharer.share_text("https://wa.me/1").expect("share");
    }
}
