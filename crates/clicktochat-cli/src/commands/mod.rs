use anyhow::{Context as _, Result};
use clicktochat_config::AppConfig;
use clicktochat_state::{paths, StateStore};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

pub mod completions;
pub mod compose;
pub mod state;
pub mod tui;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub state_path: Option<PathBuf>,
}

impl Context<'_> {
    pub fn state_store(&self) -> Result<StateStore> {
        let path =
            paths::resolve_state_path(self.state_path.clone(), self.config.state.path.clone())
                .with_context(|| "resolve state path")?;
        debug!(path = %path.display(), "state path resolved");
        Ok(StateStore::new(path))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
