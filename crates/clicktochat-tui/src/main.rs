mod actions;
mod app;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::actions::{execute_action, Hosts, SharedLinks};
use crate::app::App;
use clicktochat_config::{self as config, AppConfig};
use clicktochat_core::ComposeState;
use clicktochat_state::{paths, StateStore};

#[derive(Debug, Parser)]
#[command(name = "clicktochat-tui", version, about = "clicktochat compose screen")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    state_path: Option<PathBuf>,
    /// Start with empty fields instead of the saved ones
    #[arg(long)]
    fresh: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let app_config = config::load(args.config.clone()).with_context(|| "load config")?;
    let (mut app, store) = initial_app(&app_config, &args)?;

    let shared = SharedLinks::default();
    let hosts = Hosts::from_config(&app_config, shared.clone());

    {
        let mut terminal = TerminalGuard::new()?;
        run_app(&mut terminal, &hosts, &mut app)?;
    }

    persist(&app, store.as_ref())?;
    for link in shared.borrow().iter() {
        println!("{link}");
    }
    Ok(())
}

/// Builds the starting screen, restoring the saved fields unless disabled.
///
/// A saved file that cannot be read is reported in the footer and the
/// screen starts empty.
fn initial_app(app_config: &AppConfig, args: &Args) -> Result<(App, Option<StateStore>)> {
    let store = if app_config.state.restore {
        let path =
            paths::resolve_state_path(args.state_path.clone(), app_config.state.path.clone())
                .with_context(|| "resolve state path")?;
        Some(StateStore::new(path))
    } else {
        None
    };

    let mut app = App::new(ComposeState::default());
    app.saves_on_exit = store.is_some();
    if let (Some(store), false) = (&store, args.fresh) {
        match store.load_state() {
            Ok(compose) => app.compose = compose,
            Err(err) => app.set_error(format!("could not restore saved state: {err}")),
        }
    }
    Ok((app, store))
}

fn persist(app: &App, store: Option<&StateStore>) -> Result<()> {
    if let Some(store) = store {
        store
            .save(&app.compose.snapshot())
            .with_context(|| format!("save state {}", store.path().display()))?;
    }
    Ok(())
}

fn run_app(terminal: &mut TerminalGuard, hosts: &Hosts, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        while let Some(action) = app.next_action() {
            if let Err(err) = execute_action(app, hosts, action) {
                app.set_error(format!("{err:#}"));
            }
        }

        terminal.terminal_mut().draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}
