use tabmark_bookmarks::{BookmarkRegistry, BookmarkStore};
use tabmark_common::{EventBus, Notification, TabmarkError};
use tabmark_config::ApplicationContext;

use crate::cli::BookmarksCommand;

pub(super) fn run(ctx: &ApplicationContext, cmd: &BookmarksCommand) -> Result<(), TabmarkError> {
    let bus = EventBus::default();
    let mut notices = bus.subscribe();
    let mut registry = BookmarkRegistry::open(ctx, bus);
    let result = apply(&mut registry, cmd);

    for notice in Notification::drain(&mut notices) {
        eprintln!("{notice}");
    }
    result
}

fn apply(registry: &mut BookmarkRegistry, cmd: &BookmarksCommand) -> Result<(), TabmarkError> {
    match cmd {
        BookmarksCommand::List { json } => {
            if *json {
                let text = BookmarkStore::to_json(registry.list())
                    .map_err(|e| TabmarkError::Other(e.to_string()))?;
                println!("{text}");
            } else {
                for bookmark in registry.list() {
                    println!("{}\t{}", bookmark.title, bookmark.url);
                }
            }
        }
        BookmarksCommand::Add { url, title } => {
            let title = registry.add(title, url)?;
            println!("added '{title}'");
        }
        BookmarksCommand::Remove { title } => {
            if registry.remove(title)? {
                println!("removed '{title}'");
            } else {
                println!("no bookmark titled '{title}'");
            }
        }
        BookmarksCommand::Rename { old, new } => {
            let title = registry.rename(old, new)?;
            println!("renamed '{old}' to '{title}'");
        }
        BookmarksCommand::Clear { yes } => {
            if !yes {
                return Err(TabmarkError::Other(format!(
                    "refusing to delete {} bookmarks without --yes",
                    registry.len()
                )));
            }
            registry.clear_all()?;
            println!("all bookmarks deleted");
        }
        BookmarksCommand::Export { output } => {
            let html = registry.export();
            match output {
                Some(path) => {
                    std::fs::write(path, &html)?;
                    println!("exported {} bookmarks to {}", registry.len(), path.display());
                }
                None => print!("{}", String::from_utf8_lossy(&html)),
            }
        }
        BookmarksCommand::Import { file } => {
            let source = std::fs::read_to_string(file)?;
            let report = registry.import_html(&source)?;
            println!("imported {}, skipped {}", report.added, report.skipped);
        }
    }
    Ok(())
}
