use tabmark_common::TabmarkError;
use tabmark_config::ApplicationContext;
use tabmark_session::{ExtensionHost, RequestPolicy};
use tabmark_url::FilterDecision;

pub(super) fn normalize(text: &str) -> Result<(), TabmarkError> {
    let url = tabmark_url::normalize(text)?;
    println!("{url}");
    Ok(())
}

pub(super) fn check(ctx: &ApplicationContext, url: &str) -> Result<(), TabmarkError> {
    let policy = RequestPolicy::from_context(ctx);
    match policy.intercept_request(url, &ExtensionHost::new()) {
        FilterDecision::Allow => println!("allow"),
        FilterDecision::Block { rule } => println!("block ({rule})"),
    }
    Ok(())
}
