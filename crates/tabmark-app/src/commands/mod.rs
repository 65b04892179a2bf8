//! One handler per CLI subcommand.

mod bookmarks;
mod config;
mod session;
mod url;

use tabmark_common::TabmarkError;
use tabmark_config::ApplicationContext;
use tracing::info;

use crate::cli::{Args, Command};

pub fn run(args: Args) -> Result<(), TabmarkError> {
    match &args.command {
        Command::Normalize { text } => url::normalize(text),
        Command::Config(cmd) => config::run(&args, cmd),
        Command::CheckUrl { url: target } => url::check(&context(&args)?, target),
        Command::Bookmarks(cmd) => bookmarks::run(&context(&args)?, cmd),
        Command::Session(cmd) => session::run(&context(&args)?, cmd),
    }
}

/// Load config and resolve where data files live, honouring `--config`
/// and `--data-dir`.
fn context(args: &Args) -> Result<ApplicationContext, TabmarkError> {
    if let Some(path) = &args.config {
        info!("using config override: {}", path.display());
    }
    let config = tabmark_config::load_config(args.config.as_deref())?;
    let ctx = match &args.data_dir {
        Some(dir) => ApplicationContext::with_data_dir(&config, dir),
        None => ApplicationContext::from_config(&config)?,
    };
    Ok(ctx)
}
