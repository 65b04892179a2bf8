//! Ad-network request blocking.
//!
//! Rules are URL globs such as `*://*.doubleclick.net/*`, where `*` matches
//! any run of characters. A glob blocks a request when it matches anywhere
//! in the URL, so a plain `doubleclick.net` works as a substring rule.
//! Rules are tried in order and the first match decides; anything unmatched
//! is allowed.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// Ad and tracking networks blocked out of the box.
pub const DEFAULT_BLOCK_PATTERNS: &[&str] = &[
    "*://*.doubleclick.net/*",
    "*://*.googlesyndication.com/*",
    "*://*.googleadservices.com/*",
    "*://*.google-analytics.com/*",
    "*://adservice.google.com/*",
    "*://ads.yahoo.com/*",
    "*://*.amazon-adsystem.com/*",
    "*://*.adnxs.com/*",
    "*://*.taboola.com/*",
    "*://*.outbrain.com/*",
];

/// Outcome of checking a request against the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Allow,
    Block { rule: String },
}

impl FilterDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block { .. })
    }
}

#[derive(Debug)]
struct Rule {
    pattern: String,
    regex: Regex,
}

/// Ordered list of compiled block rules.
#[derive(Debug)]
pub struct ContentFilter {
    rules: Vec<Rule>,
    enabled: bool,
}

impl ContentFilter {
    /// Compile a filter from glob patterns. Blank patterns are skipped.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .filter_map(|p| {
                let pattern = p.as_ref().trim();
                if pattern.is_empty() {
                    return None;
                }
                match glob_to_regex(pattern) {
                    Ok(regex) => Some(Rule {
                        pattern: pattern.to_string(),
                        regex,
                    }),
                    Err(e) => {
                        warn!(pattern, "skipping block rule: {e}");
                        None
                    }
                }
            })
            .collect();

        Self {
            rules,
            enabled: true,
        }
    }

    /// A filter that allows every request.
    pub fn disabled() -> Self {
        Self {
            rules: Vec::new(),
            enabled: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn check(&self, url: &str) -> FilterDecision {
        if !self.enabled {
            return FilterDecision::Allow;
        }
        match self.rules.iter().find(|rule| rule.regex.is_match(url)) {
            Some(rule) => {
                debug!(url, rule = %rule.pattern, "request blocked");
                FilterDecision::Block {
                    rule: rule.pattern.clone(),
                }
            }
            None => FilterDecision::Allow,
        }
    }

    pub fn should_block(&self, url: &str) -> bool {
        self.check(url).is_blocked()
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_PATTERNS)
    }
}

fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    RegexBuilder::new(&body)
        .case_insensitive(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_default_ad_networks() {
        let filter = ContentFilter::default();
        assert!(filter.should_block("https://ad.doubleclick.net/ddm/trackclk"));
        assert!(filter.should_block("http://pagead2.googlesyndication.com/pagead/js"));
        assert!(filter.should_block("https://adservice.google.com/adsid/google/ui"));
        assert!(filter.should_block("https://c.amazon-adsystem.com/aax2/apstag.js"));
    }

    #[test]
    fn allows_ordinary_sites() {
        let filter = ContentFilter::default();
        assert!(!filter.should_block("https://github.com/rust-lang/rust"));
        assert!(!filter.should_block("https://www.google.com/search?q=rust"));
        assert!(!filter.should_block("https://duckduckgo.com/"));
    }

    #[test]
    fn glob_still_needs_every_literal_part() {
        let filter = ContentFilter::new(["*://*.doubleclick.net/*"]);
        // host only, no path separator after it
        assert!(!filter.should_block("https://ad.doubleclick.net"));
        // doubleclick.net mentioned in the query of another site
        assert!(!filter.should_block("https://example.com/?ref=doubleclick.net"));
        assert!(filter.should_block("https://ad.doubleclick.net/"));
    }

    #[test]
    fn plain_pattern_matches_anywhere_in_url() {
        let filter = ContentFilter::new(["doubleclick.net"]);
        assert!(filter.should_block("https://ad.doubleclick.net/x"));
        assert_eq!(
            filter.check("https://example.com/?ref=doubleclick.net"),
            FilterDecision::Block {
                rule: "doubleclick.net".into()
            }
        );
        assert!(!filter.should_block("https://example.com/"));
    }

    #[test]
    fn glob_without_outer_wildcards_is_contained() {
        let filter = ContentFilter::new(["ads.*.com/banner"]);
        assert!(filter.should_block("https://ads.example.com/banner/7.png"));
        assert!(!filter.should_block("https://ads.example.org/banner"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let filter = ContentFilter::new(["*://ads.example.com/banner?id=*"]);
        assert!(filter.should_block("https://ads.example.com/banner?id=7"));
        assert!(!filter.should_block("https://adsXexampleYcom/bannerZid=7"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let filter = ContentFilter::default();
        assert!(filter.should_block("HTTPS://AD.DOUBLECLICK.NET/X"));
    }

    #[test]
    fn first_match_wins() {
        let filter = ContentFilter::new(["*://*.example.com/ads/*", "*://*.example.com/*"]);
        assert_eq!(
            filter.check("https://cdn.example.com/ads/1.js"),
            FilterDecision::Block {
                rule: "*://*.example.com/ads/*".into()
            }
        );
        assert_eq!(
            filter.check("https://cdn.example.com/app.js"),
            FilterDecision::Block {
                rule: "*://*.example.com/*".into()
            }
        );
    }

    #[test]
    fn disabled_filter_allows_everything() {
        let mut filter = ContentFilter::default();
        filter.set_enabled(false);
        assert_eq!(
            filter.check("https://ad.doubleclick.net/x"),
            FilterDecision::Allow
        );
        assert!(!ContentFilter::disabled().should_block("https://ad.doubleclick.net/x"));
    }

    #[test]
    fn blank_patterns_are_skipped() {
        let filter = ContentFilter::new(["", "   ", "*://*.adnxs.com/*"]);
        assert_eq!(filter.rule_count(), 1);
    }

    #[test]
    fn default_rule_list() {
        assert_eq!(ContentFilter::default().rule_count(), DEFAULT_BLOCK_PATTERNS.len());
        assert!(DEFAULT_BLOCK_PATTERNS.contains(&"*://*.doubleclick.net/*"));
    }
}
