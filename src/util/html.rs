use std::sync::LazyLock;

use regex::Regex;

static HEADING_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a[^>]*class=["']heading-link[^>]*>.*?</a>"#).unwrap()
});

/// Drops GitHub's `heading-link` anchors and decodes the handful of entities
/// the changelog escapes. Anything else is passed through untouched.
pub fn clean(input: Option<&str>) -> String {
    let Some(html) = input else {
        return String::new();
    };

    HEADING_LINK
        .replace_all(html, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
}
