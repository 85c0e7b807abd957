use anyhow::{Context as _, Result};
use clap::Args;
use clicktochat_core::{open_link, share_link, ComposeState, Dispatch, LinkDto};
use clicktochat_host::{opener_from_config, sharer_from_config};
use tracing::debug;

use crate::commands::{print_json, Context};

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Phone number; anything other than digits is ignored
    #[arg(conflicts_with = "saved")]
    pub phone: Option<String>,
    #[arg(long, short, conflicts_with = "saved")]
    pub message: Option<String>,
    /// Use the phone and message saved by the compose screen
    #[arg(long)]
    pub saved: bool,
}

pub fn print_link(ctx: &Context<'_>, args: ComposeArgs) -> Result<()> {
    let state = resolve_compose(ctx, args)?;
    if ctx.json {
        return print_json(&LinkDto::new(state.phone(), state.message()));
    }
    println!("{}", state.link());
    Ok(())
}

pub fn open(ctx: &Context<'_>, args: ComposeArgs) -> Result<()> {
    let state = resolve_compose(ctx, args)?;
    let opener = opener_from_config(&ctx.config.open);
    let dispatch = open_link(opener.as_ref(), state.link()).with_context(|| "open link")?;
    log_dispatch("open", dispatch);
    Ok(())
}

pub fn share(ctx: &Context<'_>, args: ComposeArgs) -> Result<()> {
    let state = resolve_compose(ctx, args)?;
    let sharer = sharer_from_config(&ctx.config.share);
    let dispatch = share_link(sharer.as_ref(), state.link()).with_context(|| "share link")?;
    log_dispatch("share", dispatch);
    Ok(())
}

fn resolve_compose(ctx: &Context<'_>, args: ComposeArgs) -> Result<ComposeState> {
    if args.saved {
        let store = ctx.state_store()?;
        return store
            .load_state()
            .with_context(|| format!("load state {}", store.path().display()));
    }
    Ok(ComposeState::new(
        args.phone.unwrap_or_default(),
        args.message.unwrap_or_default(),
    ))
}

fn log_dispatch(action: &str, dispatch: Dispatch) {
    match dispatch {
        Dispatch::Sent => debug!(action, "link dispatched"),
        Dispatch::Skipped => debug!(action, "link is empty, nothing to do"),
    }
}
