//! Netscape bookmark file format, as read and written by every major
//! browser.

use std::sync::LazyLock;

use regex::Regex;

use crate::bookmark::Bookmark;

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*"([^"]*)"[^>]*>(.*?)</a\s*>"#).unwrap()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

const HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
";

const FOOTER: &str = "</DL><p>\n";

/// Render bookmarks as a Netscape bookmark file, one `<DT>` line each, in
/// the given order.
pub fn render(bookmarks: &[Bookmark]) -> String {
    let mut out = String::from(HEADER);
    for bookmark in bookmarks {
        out.push_str("    <DT><A HREF=\"");
        out.push_str(&escape(&bookmark.url));
        out.push_str("\">");
        out.push_str(&escape(&bookmark.title));
        out.push_str("</A>\n");
    }
    out.push_str(FOOTER);
    out
}

/// Every `<A HREF="...">title</A>` in `html`, in document order. Markup
/// inside the link text is stripped.
pub fn parse(html: &str) -> Vec<Bookmark> {
    ANCHOR_RE
        .captures_iter(html)
        .map(|caps| {
            let url = unescape(caps[1].trim());
            let text = TAG_RE.replace_all(&caps[2], "");
            Bookmark::new(unescape(text.trim()), url)
        })
        .collect()
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
