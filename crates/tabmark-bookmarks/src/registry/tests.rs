use std::path::Path;

use serde_json::Value;
use tabmark_common::{BookmarkError, Event, EventBus, InvalidUrl, TabId};
use tabmark_config::ApplicationContext;
use tabmark_session::TabSession;

use super::{BookmarkRegistry, ImportReport};
use crate::html;
use crate::store::LoadSource;

fn registry(dir: &Path) -> BookmarkRegistry {
    BookmarkRegistry::open(&ApplicationContext::isolated(dir), EventBus::default())
}

fn saved(dir: &Path) -> serde_json::Map<String, Value> {
    let text = std::fs::read_to_string(dir.join("bookmarks.json")).unwrap();
    match serde_json::from_str(&text).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn titles(registry: &BookmarkRegistry) -> Vec<&str> {
    registry.list().iter().map(|b| b.title.as_str()).collect()
}

#[test]
fn fresh_registry_has_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry(dir.path());
    assert_eq!(registry.loaded_from(), LoadSource::Defaults);
    assert_eq!(titles(&registry), vec!["Google", "YouTube", "GitHub", "DuckDuckGo"]);
    assert_eq!(saved(dir.path()).len(), 4);
}

#[test]
fn duplicate_then_new_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());

    let err = registry.add("Google", "https://www.google.com").unwrap_err();
    assert!(matches!(err, BookmarkError::DuplicateUrl(url) if url == "https://www.google.com"));
    assert_eq!(registry.len(), 4);

    let title = registry.add("News", "https://news.example.com").unwrap();
    assert_eq!(title, "News");
    assert_eq!(registry.len(), 5);

    let file = saved(dir.path());
    assert_eq!(file.len(), 5);
    assert_eq!(file["News"], "https://news.example.com");
}

#[test]
fn adding_same_pair_twice_keeps_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    registry.clear_all().unwrap();

    registry.add("Rust", "https://www.rust-lang.org").unwrap();
    assert!(registry.add("Rust", "https://www.rust-lang.org").is_err());
    assert_eq!(registry.len(), 1);
}

#[test]
fn duplicate_detection_uses_normalized_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());

    let err = registry.add("Hub", "github.com").unwrap_err();
    assert!(matches!(err, BookmarkError::DuplicateUrl(_)));
    assert!(registry.contains_url("  github.com "));
}

#[test]
fn duplicate_detection_ignores_host_case_and_root_slash() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());

    for url in ["https://GitHub.com", "https://github.com/", "HTTPS://GITHUB.COM/"] {
        let err = registry.add("Hub", url).unwrap_err();
        assert!(matches!(err, BookmarkError::DuplicateUrl(_)), "{url} was accepted");
    }
    assert_eq!(registry.len(), 4);
    // path case still matters
    registry.add("Docs", "https://github.com/Docs").unwrap();
    registry.add("docs", "https://github.com/docs").unwrap();
    assert!(registry.contains_url("https://GITHUB.com/docs"));
}

#[test]
fn same_title_different_url_gets_counter() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());

    let title = registry.add("GitHub", "https://github.com/rust-lang").unwrap();
    assert_eq!(title, "GitHub (1)");
    let title = registry.add("GitHub", "https://github.com/tokio-rs").unwrap();
    assert_eq!(title, "GitHub (2)");
    assert_eq!(registry.get("GitHub (1)").unwrap().url, "https://github.com/rust-lang");
}

#[test]
fn counter_picks_smallest_unused() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());

    registry.add("GitHub", "https://github.com/a").unwrap();
    registry.add("GitHub", "https://github.com/b").unwrap();
    registry.remove("GitHub (1)").unwrap();

    let title = registry.add("GitHub", "https://github.com/c").unwrap();
    assert_eq!(title, "GitHub (1)");
}

#[test]
fn blank_title_falls_back_to_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    let title = registry.add("   ", "crates.io").unwrap();
    assert_eq!(title, "https://crates.io");
}

#[test]
fn invalid_url_is_rejected_without_changes() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());

    let err = registry.add("Broken", "ht!tp://x").unwrap_err();
    assert!(matches!(err, BookmarkError::InvalidUrl(_)));
    let err = registry.add("Empty", "").unwrap_err();
    assert!(matches!(err, BookmarkError::InvalidUrl(InvalidUrl::Empty)));
    assert_eq!(registry.len(), 4);
}

#[test]
fn private_tab_cannot_be_bookmarked() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    let tab = TabSession::new(TabId::new(1), "https://secret.example.com", "Secret", true);

    assert!(matches!(
        registry.add_current_page(&tab),
        Err(BookmarkError::PrivateTab)
    ));
    assert!(!registry.contains_url("https://secret.example.com"));
}

#[test]
fn current_page_uses_tab_title() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    let tab = TabSession::new(TabId::new(1), "https://docs.rs", "Docs.rs", false);

    assert_eq!(registry.add_current_page(&tab).unwrap(), "Docs.rs");
    assert!(registry.contains_url("https://docs.rs"));
}

#[test]
fn remove_missing_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    assert!(!registry.remove("Nope").unwrap());
    assert_eq!(registry.len(), 4);
}

#[test]
fn remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    assert!(registry.remove("YouTube").unwrap());
    assert!(!saved(dir.path()).contains_key("YouTube"));
    assert_eq!(titles(&registry), vec!["Google", "GitHub", "DuckDuckGo"]);
}

#[test]
fn rename_keeps_position() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());

    let title = registry.rename("YouTube", "Videos").unwrap();
    assert_eq!(title, "Videos");
    assert_eq!(titles(&registry), vec!["Google", "Videos", "GitHub", "DuckDuckGo"]);

    let keys: Vec<_> = saved(dir.path()).keys().cloned().collect();
    assert_eq!(keys, vec!["Google", "Videos", "GitHub", "DuckDuckGo"]);
}

#[test]
fn rename_collision_gets_counter() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    assert_eq!(registry.rename("YouTube", "Google").unwrap(), "Google (1)");
}

#[test]
fn rename_missing_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    let err = registry.rename("Nope", "Other").unwrap_err();
    assert!(matches!(err, BookmarkError::NotFound(t) if t == "Nope"));
}

#[test]
fn clear_all_persists_empty_object() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    registry.clear_all().unwrap();
    assert!(registry.is_empty());
    assert!(saved(dir.path()).is_empty());

    let reopened = self::registry(dir.path());
    assert_eq!(reopened.loaded_from(), LoadSource::File);
    assert!(reopened.is_empty());
}

#[test]
fn reopen_sees_changes() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut registry = registry(dir.path());
        registry.add("Rust", "rust-lang.org").unwrap();
    }
    let reopened = registry(dir.path());
    assert_eq!(reopened.len(), 5);
    assert_eq!(reopened.get("Rust").unwrap().url, "https://rust-lang.org");
}

#[test]
fn export_reparses_to_registry_contents() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    registry.add("Q&A <forum>", "https://example.com/?q=\"x\"&y=1").unwrap();

    let exported = String::from_utf8(registry.export()).unwrap();
    assert!(exported.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
    assert_eq!(html::parse(&exported), registry.list());
}

#[test]
fn export_reparses_padded_titles_from_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bookmarks.json"),
        r#"{" Padded ": "https://padded.example.com"}"#,
    )
    .unwrap();
    let registry = registry(dir.path());
    assert_eq!(titles(&registry), vec!["Padded"]);

    let exported = String::from_utf8(registry.export()).unwrap();
    assert_eq!(html::parse(&exported), registry.list());
}

#[test]
fn import_adds_new_and_skips_duplicates() {
    let source_dir = tempfile::tempdir().unwrap();
    let mut source = registry(source_dir.path());
    source.add("Rust", "https://www.rust-lang.org").unwrap();
    let exported = String::from_utf8(source.export()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    registry.remove("GitHub").unwrap();

    let report = registry.import_html(&exported).unwrap();
    assert_eq!(report, ImportReport { added: 2, skipped: 3 });
    assert!(registry.contains_url("https://github.com"));
    assert!(registry.contains_url("https://www.rust-lang.org"));
    assert_eq!(saved(dir.path()).len(), 5);
}

#[test]
fn import_skips_invalid_links() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = registry(dir.path());
    let report = registry
        .import_html(r#"<DT><A HREF="javascript:alert(1)">Bad</A><DT><A HREF="docs.rs">Docs</A>"#)
        .unwrap();
    assert_eq!(report, ImportReport { added: 1, skipped: 1 });
    assert_eq!(registry.get("Docs").unwrap().url, "https://docs.rs");
}

#[test]
fn save_failure_keeps_memory_and_publishes() {
    let dir = tempfile::tempdir().unwrap();
    let bus = EventBus::default();
    let mut rx = bus.subscribe();
    let mut registry = BookmarkRegistry::open(&ApplicationContext::isolated(dir.path()), bus);
    while rx.try_recv().is_ok() {}

    // Replace the data directory with a file so the next save fails.
    std::fs::remove_dir_all(dir.path()).unwrap();
    std::fs::write(dir.path(), "").unwrap();

    let err = registry.add("News", "https://news.example.com").unwrap_err();
    assert!(matches!(err, BookmarkError::Store(_)));
    assert!(registry.contains_url("https://news.example.com"));
    assert!(matches!(
        rx.try_recv().unwrap(),
        Event::BookmarksSaveFailed { .. }
    ));

    std::fs::remove_file(dir.path()).unwrap();
}

#[test]
fn mutations_publish_events() {
    let dir = tempfile::tempdir().unwrap();
    let bus = EventBus::default();
    let mut rx = bus.subscribe();
    let mut registry = BookmarkRegistry::open(&ApplicationContext::isolated(dir.path()), bus);

    registry.add("News", "news.example.com").unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        Event::BookmarkAdded {
            title: "News".into(),
            url: "https://news.example.com".into()
        }
    );

    let _ = registry.add("Again", "https://news.example.com");
    assert_eq!(
        rx.try_recv().unwrap(),
        Event::BookmarkRejected {
            url: "https://news.example.com".into()
        }
    );

    registry.rename("News", "Headlines").unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        Event::BookmarkRenamed {
            from: "News".into(),
            to: "Headlines".into()
        }
    );

    registry.remove("Headlines").unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        Event::BookmarkRemoved {
            title: "Headlines".into()
        }
    );

    registry.clear_all().unwrap();
    assert_eq!(rx.try_recv().unwrap(), Event::BookmarksCleared);
}
