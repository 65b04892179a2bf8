//! Address-bar text to absolute URL.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tabmark_common::InvalidUrl;

/// Dot-separated labels of letters, digits and inner hyphens, ending in an
/// alphabetic label of at least two characters.
static HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}$").unwrap()
});

const HTTP: &str = "http://";
const HTTPS: &str = "https://";

/// A validated `http`/`https` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct AbsoluteUrl {
    url: String,
    host: String,
}

impl AbsoluteUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_secure(&self) -> bool {
        starts_with_ignore_case(&self.url, HTTPS)
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for AbsoluteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for AbsoluteUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl From<AbsoluteUrl> for String {
    fn from(url: AbsoluteUrl) -> Self {
        url.url
    }
}

impl TryFrom<String> for AbsoluteUrl {
    type Error = InvalidUrl;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize(&value)
    }
}

/// Canonicalize user-entered text into an absolute URL.
///
/// Text without an `http://` or `https://` prefix gets `https://`
/// prepended. Already-valid URLs come back unchanged apart from trimming.
pub fn normalize(raw: &str) -> Result<AbsoluteUrl, InvalidUrl> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InvalidUrl::Empty);
    }
    if text.chars().any(char::is_whitespace) {
        return Err(InvalidUrl::Malformed(text.to_string()));
    }

    let (url, rest) = if starts_with_ignore_case(text, HTTPS) {
        (text.to_string(), &text[HTTPS.len()..])
    } else if starts_with_ignore_case(text, HTTP) {
        (text.to_string(), &text[HTTP.len()..])
    } else {
        (format!("{HTTPS}{text}"), text)
    };

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    if authority.is_empty() {
        return Err(InvalidUrl::MissingHost(url));
    }
    if authority.contains('@') {
        return Err(InvalidUrl::Malformed(url));
    }

    let (host, port) = match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };

    if !HOST_RE.is_match(host) {
        return Err(InvalidUrl::InvalidHost(host.to_string()));
    }
    if let Some(port) = port {
        match port.parse::<u16>() {
            Ok(p) if p > 0 && port.bytes().all(|b| b.is_ascii_digit()) => {}
            _ => return Err(InvalidUrl::InvalidPort(port.to_string())),
        }
    }

    Ok(AbsoluteUrl {
        host: host.to_string(),
        url,
    })
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
