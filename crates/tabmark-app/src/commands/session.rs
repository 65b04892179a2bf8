use tabmark_app::{Browser, PageLog};
use tabmark_common::TabmarkError;
use tabmark_config::ApplicationContext;
use tabmark_session::{RecordingEngine, SessionSnapshot, SystemClock};

use crate::cli::SessionCommand;

pub(super) fn run(ctx: &ApplicationContext, cmd: &SessionCommand) -> Result<(), TabmarkError> {
    match cmd {
        SessionCommand::Show => show(ctx),
        SessionCommand::Open { urls, private } => open(ctx, urls, *private),
    }
}

fn show(ctx: &ApplicationContext) -> Result<(), TabmarkError> {
    let Some(snapshot) = SessionSnapshot::load(&ctx.session_file) else {
        println!("no saved session");
        return Ok(());
    };

    if let Some(saved_at) = snapshot.saved_at_utc() {
        let local = saved_at.with_timezone(&chrono::Local);
        println!("saved {}", local.format("%Y-%m-%d %H:%M:%S"));
    }
    for (index, tab) in snapshot.tabs.iter().enumerate() {
        let marker = if snapshot.active == Some(index) { '*' } else { ' ' };
        println!("{marker} {}\t{}", tab.title, tab.url);
    }
    Ok(())
}

/// Open tabs headlessly on top of the saved session and save it again.
///
/// The saved session is always loaded here, even with
/// `navigation.restore_session = false`, so the write at the end never
/// drops tabs saved earlier.
fn open(ctx: &ApplicationContext, urls: &[String], private: bool) -> Result<(), TabmarkError> {
    let mut ctx = ctx.clone();
    ctx.restore_session = true;
    let mut browser = Browser::new(ctx, RecordingEngine::new(), SystemClock);
    browser
        .register_extension(Box::new(PageLog::default()))
        .map_err(|e| TabmarkError::Other(e.to_string()))?;
    browser.restore_session();

    for url in urls {
        let id = browser.tabs_mut().open(Some(url.as_str()), private)?;
        if let Some(tab) = browser.tabs().tab(id) {
            println!("opened {}", tab.url);
        }
    }

    browser.save_session()?;
    for notice in browser.take_notifications() {
        eprintln!("{notice}");
    }
    println!("{} tabs in session", browser.tabs().snapshot().tabs.len());
    Ok(())
}
