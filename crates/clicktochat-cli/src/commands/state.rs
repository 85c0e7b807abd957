use anyhow::{Context as _, Result};
use clap::Subcommand;
use clicktochat_core::LinkDto;

use crate::commands::{print_json, Context};

#[derive(Debug, Subcommand)]
pub enum StateCommand {
    /// Show the phone and message saved by the compose screen
    Show,
    /// Forget the saved phone and message
    Clear,
}

pub fn show_state(ctx: &Context<'_>) -> Result<()> {
    let store = ctx.state_store()?;
    let snapshot = store
        .load()
        .with_context(|| format!("load state {}", store.path().display()))?;
    if ctx.json {
        let dto = snapshot.map(|saved| LinkDto::new(&saved.phone, &saved.message));
        return print_json(&dto);
    }
    match snapshot {
        Some(saved) => {
            let dto = LinkDto::new(&saved.phone, &saved.message);
            println!("phone: {}", saved.phone);
            println!("digits: {}", dto.digits);
            println!("message: {}", dto.message);
            println!("link: {}", dto.link);
        }
        None => println!("no saved state"),
    }
    Ok(())
}

pub fn clear_state(ctx: &Context<'_>) -> Result<()> {
    let store = ctx.state_store()?;
    let removed = store
        .clear()
        .with_context(|| format!("clear state {}", store.path().display()))?;
    if ctx.json {
        return print_json(&serde_json::json!({ "cleared": removed }));
    }
    if removed {
        println!("cleared {}", store.path().display());
    } else {
        println!("no saved state");
    }
    Ok(())
}
