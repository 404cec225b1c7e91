//! Per-format text escaping and line-break policy.

use once_cell::sync::Lazy;
use regex::Regex;

/// Markup a piece of text is embedded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    /// HTML element content
    Html,
    /// Markdown block or table cell
    Markdown,
}

/// Explicit line break marker for both targets.
///
/// Markdown table cells cannot hold raw newlines, so Markdown uses the
/// HTML tag as well.
pub const LINE_BREAK: &str = "<br>";

const MARKDOWN_SPECIAL: &[char] = &[
    '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '.', '!', '|', '-',
];

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<>]+").expect("URL pattern is valid"));

/// Escape and apply the line-break policy for the given target.
pub fn normalize(text: &str, target: TextTarget, ignore_line_break: bool) -> String {
    let escaped = match target {
        TextTarget::Html => escape_html(text),
        TextTarget::Markdown => escape_markdown(text),
    };
    apply_line_break(&escaped, ignore_line_break)
}

/// Delete newlines, or turn them into [`LINE_BREAK`].
pub fn apply_line_break(text: &str, ignore_line_break: bool) -> String {
    if ignore_line_break {
        text.replace('\n', "")
    } else {
        text.replace('\n', LINE_BREAK)
    }
}

/// HTML-escape text.
///
/// URLs are escaped segment by segment like the surrounding text and are
/// left as plain text, never turned into links.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for url in URL_PATTERN.find_iter(text) {
        escape_html_into(&mut result, &text[last..url.start()]);
        escape_html_into(&mut result, url.as_str());
        last = url.end();
    }
    escape_html_into(&mut result, &text[last..]);

    result
}

fn escape_html_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

/// Backslash-escape every character with Markdown meaning.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Inverse of [`escape_markdown`].
pub fn unescape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if MARKDOWN_SPECIAL.contains(&next) {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}
