//! Best-effort HTML-to-plain-text reduction for `stripHTML` exports.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Strip markup from authored rich text, leaving readable plain text.
///
/// Block-level closings become line breaks before tags are dropped so that
/// paragraphs do not run together; remaining entities are decoded for the
/// handful the authoring editor emits.
pub fn strip_html(input: &str) -> String {
    let with_breaks = input
        .replace("</p>", "\n")
        .replace("</div>", "\n")
        .replace("</li>", "\n")
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n");

    let text = TAG.replace_all(&with_breaks, "");

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    decoded
        .lines()
        .map(|line| WHITESPACE.replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_decodes_entities() {
        let html = "<p>Chapter <b>475</b> &amp; rules</p><p>Second&nbsp;paragraph</p>";
        assert_eq!(strip_html(html), "Chapter 475 & rules\nSecond paragraph");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_html("already plain"), "already plain");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(strip_html("<div>a   b\t c</div>"), "a b c");
    }
}
