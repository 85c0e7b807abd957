use anyhow::{anyhow, Result};
use clap::Args;
use std::env;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Args)]
pub struct TuiArgs {
    /// Start with empty fields instead of the saved ones
    #[arg(long)]
    pub fresh: bool,
}

pub fn launch(
    config_path: Option<PathBuf>,
    state_path: Option<PathBuf>,
    args: TuiArgs,
    verbose: bool,
) -> Result<()> {
    let mut command = build_command(config_path, state_path, args.fresh);
    if verbose {
        eprintln!("exec: {:?}", command);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(exec_error(err))
    }

    #[cfg(not(unix))]
    {
        use anyhow::Context as _;
        let status = command.status().with_context(|| "launch clicktochat-tui")?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn build_command(
    config_path: Option<PathBuf>,
    state_path: Option<PathBuf>,
    fresh: bool,
) -> Command {
    let binary = find_tui_binary();
    let mut command = Command::new(binary);
    if let Some(path) = config_path {
        command.arg("--config").arg(path);
    }
    if let Some(path) = state_path {
        command.arg("--state-path").arg(path);
    }
    if fresh {
        command.arg("--fresh");
    }
    command
}

fn find_tui_binary() -> PathBuf {
    let name = format!("clicktochat-tui{}", env::consts::EXE_SUFFIX);
    if let Ok(current) = env::current_exe() {
        if let Some(dir) = current.parent() {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(name)
}

fn exec_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        return anyhow!(
            "clicktochat-tui binary not found; build it with `cargo build -p clicktochat-tui` or install the package"
        );
    }
    anyhow!("launch clicktochat-tui failed: {}", err)
}

#[cfg(test)]
mod tests {
    use super::build_command;
    use std::path::PathBuf;

    #[test]
    fn build_command_forwards_paths_and_flags() {
        let command = build_command(
            Some(PathBuf::from("/tmp/config.toml")),
            Some(PathBuf::from("/tmp/state.json")),
            true,
        );
        let args: Vec<String> = command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "--config",
                "/tmp/config.toml",
                "--state-path",
                "/tmp/state.json",
                "--fresh",
            ]
        );
    }

    #[test]
    fn build_command_without_options_has_no_args() {
        let command = build_command(None, None, false);
        assert_eq!(command.get_args().count(), 0);
    }
}
